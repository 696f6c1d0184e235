use std::fs;
use tempfile::TempDir;
use template_setup::config::config_manager::ConfigManager;
use template_setup::enums::tech_stack::TechStack;
use template_setup::errors::SetupError;
use template_setup::structs::project_overrides::ProjectOverrides;
use crate::common;

#[test]
fn defaults_file_replaces_prompt_defaults() -> anyhow::Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = config_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "author_name = \"Ada\"\nauthor_email = \"ada@example.com\"\ntech_stack = \"python-only\"\n",
    )?;
    let defaults = ConfigManager::load(Some(&config_path))?;

    let root = common::template_root();
    let mut runner = common::runner(root.path(), "engine\n\n\n\n\ny\n", common::no_git());
    let config = runner.run(&ProjectOverrides::default(), &defaults)?;

    assert_eq!(config.author(), "Ada <ada@example.com>");
    assert_eq!(config.tech_stack, TechStack::PythonOnly);

    let output = common::output(runner);
    assert!(output.contains("Author name [Ada]: "));
    assert!(output.contains("Choice (1-5) [4]: "));
    Ok(())
}

#[test]
fn malformed_defaults_file_is_rejected() -> anyhow::Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = config_dir.path().join("config.toml");
    fs::write(&config_path, "name = [unterminated\n")?;

    let error = ConfigManager::load(Some(&config_path)).unwrap_err();
    assert!(matches!(error, SetupError::Parse { .. }));
    Ok(())
}
