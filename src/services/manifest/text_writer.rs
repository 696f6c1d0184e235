use std::fs;
use std::path::Path;
use serde_json::Value;
use crate::config::constants::{
    TEMPLATE_MANIFEST_AUTHOR, TEMPLATE_MANIFEST_DESCRIPTION, TEMPLATE_MANIFEST_NAME,
};
use crate::errors::{ResultExt, SetupError, SetupResult};
use crate::structs::project_config::ProjectConfig;
use crate::traits::manifest_writer::ManifestWriter;

/// Fallback used when `jq` is missing: swaps the template's known
/// `"key": "value"` lines for the project's values.
pub struct TextManifestWriter;

impl TextManifestWriter {
    /// Returns the rewritten content and how many template fields matched.
    pub fn substitute(content: &str, config: &ProjectConfig) -> (String, usize) {
        let author = config.author();
        let replacements = [
            (field("name", TEMPLATE_MANIFEST_NAME), field("name", &config.name)),
            (field("description", TEMPLATE_MANIFEST_DESCRIPTION), field("description", &config.description)),
            (field("author", TEMPLATE_MANIFEST_AUTHOR), field("author", &author)),
        ];

        let mut matched = 0;
        let lines: Vec<String> = content
            .split_inclusive('\n')
            .map(|line| {
                replacements.iter().fold(line.to_string(), |line, (from, to)| {
                    if line.contains(from.as_str()) {
                        matched += 1;
                        line.replacen(from.as_str(), to, 1)
                    } else {
                        line
                    }
                })
            })
            .collect();

        (lines.concat(), matched)
    }
}

impl ManifestWriter for TextManifestWriter {
    fn name(&self) -> &'static str {
        "text substitution"
    }

    fn write_metadata(&self, manifest: &Path, config: &ProjectConfig) -> SetupResult<()> {
        if !manifest.is_file() {
            return Err(SetupError::file_error(manifest, "read manifest", "file not found"));
        }

        let content = fs::read_to_string(manifest).with_file(manifest, "read manifest")?;
        let (rewritten, matched) = Self::substitute(&content, config);

        if matched == 0 {
            log::warn!(
                "⚠️ No template fields found in {}, leaving it unchanged",
                manifest.display()
            );
            return Ok(());
        }

        fs::write(manifest, rewritten).with_file(manifest, "write manifest")
    }

    fn remove_scripts(&self, _manifest: &Path, _scripts: &[&'static str]) -> SetupResult<bool> {
        Ok(false)
    }
}

fn field(key: &str, value: &str) -> String {
    format!("\"{}\": {}", key, Value::String(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::tech_stack::TechStack;
    use tempfile::TempDir;

    const TEMPLATE: &str = "{\n  \"name\": \"ai-project-template\",\n  \"version\": \"1.0.0\",\n  \"description\": \"Template for AI-assisted development projects\",\n  \"author\": \"Your Name <your.email@example.com>\",\n  \"license\": \"MIT\"\n}\n";

    fn config(name: &str) -> ProjectConfig {
        ProjectConfig {
            name: name.to_string(),
            description: "A \"quoted\" description".to_string(),
            author_name: "Jane".to_string(),
            author_email: "jane@example.com".to_string(),
            tech_stack: TechStack::Node,
        }
    }

    #[test]
    fn substitutes_all_template_fields_with_escaping() {
        let (rewritten, matched) = TextManifestWriter::substitute(TEMPLATE, &config("widget-ai"));
        assert_eq!(matched, 3);

        let value: Value = serde_json::from_str(&rewritten).unwrap();
        assert_eq!(value["name"], "widget-ai");
        assert_eq!(value["description"], "A \"quoted\" description");
        assert_eq!(value["author"], "Jane <jane@example.com>");
        assert_eq!(value["version"], "1.0.0");
        assert!(rewritten.ends_with("}\n"));
    }

    #[test]
    fn rewrites_every_field_on_a_single_line_manifest() {
        let compact = "{\"name\": \"ai-project-template\", \"description\": \"Template for AI-assisted development projects\", \"author\": \"Your Name <your.email@example.com>\"}";

        let (rewritten, matched) = TextManifestWriter::substitute(compact, &config("widget-ai"));

        assert_eq!(matched, 3);
        let value: Value = serde_json::from_str(&rewritten).unwrap();
        assert_eq!(value["name"], "widget-ai");
        assert_eq!(value["description"], "A \"quoted\" description");
        assert_eq!(value["author"], "Jane <jane@example.com>");
    }

    #[test]
    fn unrelated_manifest_is_left_byte_identical() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("package.json");
        let original = "{\n  \"name\": \"already-renamed\"\n}\n";
        fs::write(&manifest, original).unwrap();

        TextManifestWriter.write_metadata(&manifest, &config("widget-ai")).unwrap();

        assert_eq!(fs::read_to_string(&manifest).unwrap(), original);
    }

    #[test]
    fn cannot_remove_scripts() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("package.json");
        fs::write(&manifest, TEMPLATE).unwrap();

        assert!(!TextManifestWriter.remove_scripts(&manifest, &["dev:frontend"]).unwrap());
        assert_eq!(fs::read_to_string(&manifest).unwrap(), TEMPLATE);
    }

    #[test]
    fn missing_manifest_is_a_file_error() {
        let dir = TempDir::new().unwrap();
        let error = TextManifestWriter
            .write_metadata(&dir.path().join("package.json"), &config("x"))
            .unwrap_err();
        assert!(matches!(error, SetupError::FileOperation { .. }));
    }
}
