use crate::config::constants::{
    DEFAULT_AUTHOR_EMAIL, DEFAULT_AUTHOR_NAME, DEFAULT_DESCRIPTION, DEFAULT_PROJECT_NAME,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_project_name() -> String {
        DEFAULT_PROJECT_NAME.to_string()
    }

    pub fn default_description() -> String {
        DEFAULT_DESCRIPTION.to_string()
    }

    pub fn default_author_name() -> String {
        DEFAULT_AUTHOR_NAME.to_string()
    }

    pub fn default_author_email() -> String {
        DEFAULT_AUTHOR_EMAIL.to_string()
    }
}
