use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;
use template_setup::helpers::prompter::Prompter;
use template_setup::services::manifest::text_writer::TextManifestWriter;
use template_setup::structs::setup_options::SetupOptions;
use template_setup::workers::command_runner::CommandRunner;

pub const TEMPLATE_MANIFEST: &str = r#"{
  "name": "ai-project-template",
  "version": "1.0.0",
  "description": "Template for AI-assisted development projects",
  "author": "Your Name <your.email@example.com>",
  "license": "MIT",
  "scripts": {
    "dev": "npm run dev:frontend",
    "dev:frontend": "vite",
    "build:frontend": "vite build",
    "test": "jest"
  }
}
"#;

pub const TEMPLATE_README: &str = "# AI Project Template\n\nRun ./setup-template.sh to get started.\n";

/// A scratch template root with the files the customizer rewrites.
pub fn template_root() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("package.json"), TEMPLATE_MANIFEST).expect("write manifest");
    fs::write(dir.path().join("README.md"), TEMPLATE_README).expect("write readme");
    dir
}

pub type TestRunner = CommandRunner<Cursor<Vec<u8>>, Vec<u8>>;

pub fn runner(root: &Path, input: &str, options: SetupOptions) -> TestRunner {
    let options = SetupOptions {
        root: root.to_path_buf(),
        ..options
    };
    let prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    CommandRunner::new(prompter, options, Box::new(TextManifestWriter))
}

pub fn no_git() -> SetupOptions {
    SetupOptions {
        init_git: false,
        ..SetupOptions::default()
    }
}

pub fn output(runner: TestRunner) -> String {
    let (_, output) = runner.into_prompter().into_inner();
    String::from_utf8(output).expect("utf-8 output")
}
