use std::io::{self, Write};
use env_logger::Env;
use crate::config::constants::{MANIFEST_FILE, README_FILE, REQUIREMENTS_FILE, SEPARATOR_WIDTH};
use crate::enums::tech_stack::TechStack;
use crate::structs::project_config::ProjectConfig;

pub struct SetupLogger;

impl SetupLogger {
    /// `RUST_LOG` wins over the default level.
    pub fn init(verbose: bool) {
        let level = if verbose { "debug" } else { "info" };
        let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
            .format_timestamp(None)
            .format_target(false)
            .try_init();
    }

    pub fn print_summary<W: Write>(out: &mut W, config: &ProjectConfig) -> io::Result<()> {
        writeln!(out, "\n📋 Project summary")?;
        writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        writeln!(out, "  Name:        {}", config.name)?;
        writeln!(out, "  Description: {}", config.description)?;
        writeln!(out, "  Author:      {}", config.author())?;
        writeln!(out, "  Tech stack:  {} ({})", config.tech_stack.label(), config.tech_stack)?;
        writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        out.flush()
    }

    pub fn print_cancelled<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "❌ Setup cancelled. No files were changed.")?;
        out.flush()
    }

    pub fn print_next_steps<W: Write>(out: &mut W, config: &ProjectConfig) -> io::Result<()> {
        writeln!(out, "\n✅ {} is ready!", config.name)?;
        writeln!(out, "\nNext steps:")?;

        let steps: &[&str] = match config.tech_stack {
            TechStack::Node | TechStack::NodeApi => &["npm install", "npm run dev"],
            TechStack::Python => &["python -m venv .venv", "pip install -r requirements.txt", "npm install"],
            TechStack::PythonOnly => &["python -m venv .venv", "source .venv/bin/activate"],
            TechStack::Custom => &["Add your stack's dependencies and update package.json"],
        };
        for (i, step) in steps.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, step)?;
        }

        writeln!(out, "\nFiles updated: {}, {}", MANIFEST_FILE, README_FILE)?;
        if config.tech_stack.writes_requirements() {
            writeln!(out, "Files created: {}", REQUIREMENTS_FILE)?;
        }
        out.flush()
    }
}
