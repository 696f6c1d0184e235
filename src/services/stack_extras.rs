use std::fs;
use std::path::Path;
use crate::config::constants::{MANIFEST_FILE, NODE_API_REMOVED_SCRIPTS, PYTHON_REQUIREMENTS, REQUIREMENTS_FILE};
use crate::enums::tech_stack::TechStack;
use crate::errors::{ResultExt, SetupResult};
use crate::structs::project_config::ProjectConfig;
use crate::traits::manifest_writer::ManifestWriter;

pub struct StackExtras;

impl StackExtras {
    pub fn apply(root: &Path, config: &ProjectConfig, writer: &dyn ManifestWriter) -> SetupResult<()> {
        match config.tech_stack {
            TechStack::Python => {
                let path = root.join(REQUIREMENTS_FILE);
                fs::write(&path, Self::requirements()).with_file(&path, "write requirements")?;
                log::info!("🐍 Wrote {}", REQUIREMENTS_FILE);
            }
            TechStack::NodeApi => {
                let manifest = root.join(MANIFEST_FILE);
                if writer.remove_scripts(&manifest, NODE_API_REMOVED_SCRIPTS)? {
                    log::info!("🧹 Removed frontend scripts from {}", MANIFEST_FILE);
                } else {
                    log::info!("⏭️ Skipping frontend script removal ({} cannot edit scripts)", writer.name());
                }
            }
            TechStack::Node | TechStack::PythonOnly | TechStack::Custom => {}
        }

        Ok(())
    }

    pub fn requirements() -> String {
        let mut content = PYTHON_REQUIREMENTS.join("\n");
        content.push('\n');
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::manifest::text_writer::TextManifestWriter;
    use crate::traits::manifest_writer::MockManifestWriter;
    use tempfile::TempDir;

    fn config(tech_stack: TechStack) -> ProjectConfig {
        ProjectConfig {
            name: "widget-ai".to_string(),
            description: "d".to_string(),
            author_name: "a".to_string(),
            author_email: "e".to_string(),
            tech_stack,
        }
    }

    #[test]
    fn python_overwrites_requirements() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(REQUIREMENTS_FILE);
        fs::write(&path, "flask\n").unwrap();

        StackExtras::apply(dir.path(), &config(TechStack::Python), &TextManifestWriter).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), StackExtras::requirements());
    }

    #[test]
    fn other_stacks_write_no_requirements() {
        for stack in [TechStack::Node, TechStack::PythonOnly, TechStack::Custom, TechStack::NodeApi] {
            let dir = TempDir::new().unwrap();
            StackExtras::apply(dir.path(), &config(stack), &TextManifestWriter).unwrap();
            assert!(!dir.path().join(REQUIREMENTS_FILE).exists(), "{}", stack);
        }
    }

    #[test]
    fn node_api_asks_writer_to_remove_frontend_scripts() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join(MANIFEST_FILE);

        let mut writer = MockManifestWriter::new();
        writer
            .expect_remove_scripts()
            .withf(move |path, scripts| path == manifest && scripts == NODE_API_REMOVED_SCRIPTS)
            .times(1)
            .returning(|_, _| Ok(true));

        StackExtras::apply(dir.path(), &config(TechStack::NodeApi), &writer).unwrap();
    }
}
