use std::io::{BufRead, Write};
use crate::enums::tech_stack::TechStack;
use crate::errors::SetupResult;
use crate::helpers::prompter::Prompter;
use crate::structs::config::setup_defaults::SetupDefaults;
use crate::structs::project_overrides::ProjectOverrides;

/// Project metadata collected once and then only read by the rendering steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    pub author_name: String,
    pub author_email: String,
    pub tech_stack: TechStack,
}

impl ProjectConfig {
    /// Resolves each field from the command line first, then the prompt
    /// (interactive runs only), then the defaults.
    pub fn collect<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        overrides: &ProjectOverrides,
        defaults: &SetupDefaults,
        interactive: bool,
    ) -> SetupResult<Self> {
        let mut field = |value: &Option<String>, label: &str, default: &str| -> SetupResult<String> {
            match value {
                Some(value) => Ok(value.clone()),
                None if interactive => prompter.ask(label, default),
                None => Ok(default.to_string()),
            }
        };

        let name = field(&overrides.name, "Project name", &defaults.name)?;
        let description = field(&overrides.description, "Project description", &defaults.description)?;
        let author_name = field(&overrides.author_name, "Author name", &defaults.author_name)?;
        let author_email = field(&overrides.author_email, "Author email", &defaults.author_email)?;

        let tech_stack = match overrides.tech_stack {
            Some(stack) => stack,
            None if interactive => prompter.select_tech_stack(defaults.tech_stack)?,
            None => defaults.tech_stack,
        };

        Ok(Self {
            name,
            description,
            author_name,
            author_email,
            tech_stack,
        })
    }

    /// Manifest `author` field, e.g. `Jane Doe <jane@example.com>`.
    pub fn author(&self) -> String {
        format!("{} <{}>", self.author_name, self.author_email)
    }
}
