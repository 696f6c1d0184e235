use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ResultExt, SetupError, SetupResult};
use crate::structs::config::setup_defaults::SetupDefaults;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the defaults file. An explicit path must exist; the default
    /// location is optional and falls back to the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> SetupResult<SetupDefaults> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(SetupError::file_error(path, "read config", "file not found"));
            }
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                log::debug!("No defaults file found, using built-in defaults");
                Ok(SetupDefaults::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> SetupResult<SetupDefaults> {
        log::info!("📋 Loading defaults from: {}", path.display());
        let content = fs::read_to_string(path).with_file(path, "read config")?;
        let defaults: SetupDefaults = toml::from_str(&content)?;
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::tech_stack::TechStack;
    use tempfile::TempDir;

    #[test]
    fn partial_file_keeps_builtin_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "author_name = \"Ada Lovelace\"\ntech_stack = \"python\"\n").unwrap();

        let defaults = ConfigManager::load(Some(&path)).unwrap();

        assert_eq!(defaults.author_name, "Ada Lovelace");
        assert_eq!(defaults.tech_stack, TechStack::Python);
        assert_eq!(defaults.name, SetupDefaults::default().name);
        assert_eq!(defaults.author_email, SetupDefaults::default().author_email);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tech_stack = \"cobol\"\n").unwrap();

        let error = ConfigManager::load(Some(&path)).unwrap_err();
        assert!(matches!(error, SetupError::Parse { .. }));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let error = ConfigManager::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(error, SetupError::FileOperation { .. }));
    }
}
