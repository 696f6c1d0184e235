use crate::enums::tech_stack::TechStack;

/// Values supplied on the command line; each one skips its prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectOverrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub tech_stack: Option<TechStack>,
}
