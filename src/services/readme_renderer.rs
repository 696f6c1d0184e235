use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{PROJECT_DIRECTORIES, README_FILE};
use crate::enums::tech_stack::TechStack;
use crate::errors::{ResultExt, SetupResult};
use crate::structs::project_config::ProjectConfig;

/// Regenerates `README.md` from the project config. The existing file is
/// always replaced; there is no merge with previous content.
pub struct ReadmeRenderer;

impl ReadmeRenderer {
    pub fn render(config: &ProjectConfig) -> String {
        let structure: String = PROJECT_DIRECTORIES
            .iter()
            .map(|dir| format!("- `{}/`\n", dir))
            .collect();

        format!(
            r#"# {name}

{description}

## Tech Stack

{stack_label}: {stack_description}

## Getting Started

```bash
{getting_started}
```

## Project Structure

{structure}
## Author

{author_name} <{author_email}>
"#,
            name = config.name,
            description = config.description,
            stack_label = config.tech_stack.label(),
            stack_description = config.tech_stack.description(),
            getting_started = Self::getting_started(config.tech_stack),
            structure = structure,
            author_name = config.author_name,
            author_email = config.author_email,
        )
    }

    pub fn write(root: &Path, config: &ProjectConfig) -> SetupResult<PathBuf> {
        let path = root.join(README_FILE);
        fs::write(&path, Self::render(config)).with_file(&path, "write README")?;
        Ok(path)
    }

    pub fn getting_started(stack: TechStack) -> &'static str {
        match stack {
            TechStack::Node | TechStack::NodeApi => "npm install\nnpm run dev",
            TechStack::Python => "pip install -r requirements.txt\nnpm install",
            TechStack::PythonOnly => "python -m venv .venv\nsource .venv/bin/activate",
            TechStack::Custom => "# Add your setup commands here",
        }
    }
}
