use std::io::{BufRead, Write};
use std::time::Instant;
use crate::config::constants::MANIFEST_FILE;
use crate::errors::{SetupError, SetupResult};
use crate::helpers::prompter::Prompter;
use crate::logger::setup_logger::SetupLogger;
use crate::services::directory_scaffolder::DirectoryScaffolder;
use crate::services::git_initializer::GitInitializer;
use crate::services::readme_renderer::ReadmeRenderer;
use crate::services::stack_extras::StackExtras;
use crate::structs::config::setup_defaults::SetupDefaults;
use crate::structs::project_config::ProjectConfig;
use crate::structs::project_overrides::ProjectOverrides;
use crate::structs::setup_options::SetupOptions;
use crate::traits::manifest_writer::ManifestWriter;

/// Runs the setup flow:
/// collect → summary → confirm → manifest → README → directories → extras → git → next steps.
pub struct CommandRunner<R, W> {
    prompter: Prompter<R, W>,
    options: SetupOptions,
    manifest_writer: Box<dyn ManifestWriter>,
    start_time: Option<Instant>,
}

impl<R: BufRead, W: Write> CommandRunner<R, W> {
    pub fn new(prompter: Prompter<R, W>, options: SetupOptions, manifest_writer: Box<dyn ManifestWriter>) -> Self {
        Self {
            prompter,
            options,
            manifest_writer,
            start_time: None,
        }
    }

    pub fn run(&mut self, overrides: &ProjectOverrides, defaults: &SetupDefaults) -> SetupResult<ProjectConfig> {
        self.start_time = Some(Instant::now());

        let root = self.options.root.clone();
        if !root.is_dir() {
            return Err(SetupError::file_error(&root, "open template root", "not a directory"));
        }

        log::info!("🚀 Customizing project template in {}", root.display());

        let config = ProjectConfig::collect(&mut self.prompter, overrides, defaults, self.options.interactive)?;
        SetupLogger::print_summary(self.prompter.writer(), &config)?;

        if !self.confirmed()? {
            SetupLogger::print_cancelled(self.prompter.writer())?;
            return Err(SetupError::Cancelled);
        }

        log::info!("📝 Updating {} ({})", MANIFEST_FILE, self.manifest_writer.name());
        self.manifest_writer.write_metadata(&root.join(MANIFEST_FILE), &config)?;

        let readme = ReadmeRenderer::write(&root, &config)?;
        log::info!("📄 Wrote {}", readme.display());

        let created = DirectoryScaffolder::ensure(&root)?;
        log::info!("📁 Project directories ready ({} created)", created.len());

        StackExtras::apply(&root, &config, self.manifest_writer.as_ref())?;

        if self.options.init_git {
            if GitInitializer::initialize(&root)? {
                log::info!("✅ Created initial commit");
            }
        } else {
            log::info!("⏭️ Skipping git initialization");
        }

        SetupLogger::print_next_steps(self.prompter.writer(), &config)?;

        if let Some(start) = self.start_time {
            log::info!("⏱️  Setup completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        Ok(config)
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    fn confirmed(&mut self) -> SetupResult<bool> {
        if self.options.assume_yes || !self.options.interactive {
            return Ok(true);
        }
        self.prompter.confirm("\nProceed with setup?")
    }
}
