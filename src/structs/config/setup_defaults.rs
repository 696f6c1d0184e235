use serde::Deserialize;
use crate::enums::tech_stack::TechStack;
use crate::helpers::config_helper::ConfigHelper;

/// Prompt defaults, optionally overridden by the user's defaults file.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SetupDefaults {
    #[serde(default = "ConfigHelper::default_project_name")]
    pub name: String,

    #[serde(default = "ConfigHelper::default_description")]
    pub description: String,

    #[serde(default = "ConfigHelper::default_author_name")]
    pub author_name: String,

    #[serde(default = "ConfigHelper::default_author_email")]
    pub author_email: String,

    #[serde(default)]
    pub tech_stack: TechStack,
}

impl Default for SetupDefaults {
    fn default() -> Self {
        Self {
            name: ConfigHelper::default_project_name(),
            description: ConfigHelper::default_description(),
            author_name: ConfigHelper::default_author_name(),
            author_email: ConfigHelper::default_author_email(),
            tech_stack: TechStack::default(),
        }
    }
}
