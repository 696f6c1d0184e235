use std::path::PathBuf;
use crate::config::constants::JQ_BINARY;
use crate::services::manifest::jq_writer::JqManifestWriter;
use crate::services::manifest::text_writer::TextManifestWriter;
use crate::traits::manifest_writer::ManifestWriter;

pub struct ToolProbe;

impl ToolProbe {
    pub fn find(tool: &str) -> Option<PathBuf> {
        which::which(tool).ok()
    }

    /// Picks the manifest strategy once, at startup.
    pub fn manifest_writer() -> Box<dyn ManifestWriter> {
        match Self::find(JQ_BINARY) {
            Some(binary) => {
                log::debug!("Found {} at {}", JQ_BINARY, binary.display());
                Box::new(JqManifestWriter::new(binary))
            }
            None => {
                log::info!("ℹ️ {} not found, package.json will be updated by text substitution", JQ_BINARY);
                Box::new(TextManifestWriter)
            }
        }
    }
}
