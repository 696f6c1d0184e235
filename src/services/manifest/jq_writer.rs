use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use crate::config::constants::JQ_BINARY;
use crate::errors::{ResultExt, SetupError, SetupResult};
use crate::structs::project_config::ProjectConfig;
use crate::traits::manifest_writer::ManifestWriter;

/// Structured edits through a `jq` executable found on the host.
pub struct JqManifestWriter {
    binary: PathBuf,
}

impl JqManifestWriter {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }

    fn apply_filter(&self, manifest: &Path, args: &[(String, &str)], filter: &str) -> SetupResult<()> {
        if !manifest.is_file() {
            return Err(SetupError::file_error(manifest, "read manifest", "file not found"));
        }

        let mut command = Command::new(&self.binary);
        for (name, value) in args {
            command.arg("--arg").arg(name).arg(value);
        }
        log::debug!("Running {} with filter {}", self.binary.display(), filter);

        let output = command
            .arg(filter)
            .arg(manifest)
            .output()
            .map_err(|e| SetupError::tool_error(JQ_BINARY, e))?;

        if !output.status.success() {
            return Err(SetupError::tool_error(
                JQ_BINARY,
                String::from_utf8_lossy(&output.stderr).trim(),
            ));
        }

        fs::write(manifest, &output.stdout).with_file(manifest, "write manifest")
    }
}

impl ManifestWriter for JqManifestWriter {
    fn name(&self) -> &'static str {
        "jq"
    }

    fn write_metadata(&self, manifest: &Path, config: &ProjectConfig) -> SetupResult<()> {
        let author = config.author();
        let args = [
            ("name".to_string(), config.name.as_str()),
            ("description".to_string(), config.description.as_str()),
            ("author".to_string(), author.as_str()),
        ];
        self.apply_filter(
            manifest,
            &args,
            ".name = $name | .description = $description | .author = $author",
        )
    }

    fn remove_scripts(&self, manifest: &Path, scripts: &[&'static str]) -> SetupResult<bool> {
        if scripts.is_empty() {
            return Ok(true);
        }

        let args: Vec<(String, &str)> = scripts
            .iter()
            .enumerate()
            .map(|(i, script)| (format!("script{}", i), *script))
            .collect();
        let paths: Vec<String> = args
            .iter()
            .map(|(name, _)| format!(".scripts[${}]", name))
            .collect();

        self.apply_filter(manifest, &args, &format!("del({})", paths.join(", ")))?;
        Ok(true)
    }
}
