use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOptions {
    /// Template root every file path is resolved against.
    pub root: PathBuf,
    pub assume_yes: bool,
    pub interactive: bool,
    pub init_git: bool,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            assume_yes: false,
            interactive: true,
            init_git: true,
        }
    }
}
