use std::path::Path;
use crate::errors::SetupResult;
use crate::structs::project_config::ProjectConfig;

/// Strategy for editing the dependency manifest in place.
#[cfg_attr(test, mockall::automock)]
pub trait ManifestWriter {
    fn name(&self) -> &'static str;

    /// Sets the manifest's name, description and author.
    fn write_metadata(&self, manifest: &Path, config: &ProjectConfig) -> SetupResult<()>;

    /// Removes the named `scripts` entries. Returns `false` when this
    /// strategy cannot edit scripts and the manifest was left untouched.
    fn remove_scripts(&self, manifest: &Path, scripts: &[&'static str]) -> SetupResult<bool>;
}
