use std::path::PathBuf;
use clap::Parser;
use crate::enums::tech_stack::TechStack;
use crate::structs::project_overrides::ProjectOverrides;
use crate::structs::setup_options::SetupOptions;

#[derive(Parser, Debug)]
#[clap(name = "template-setup")]
#[clap(about = "Customize this project template for a new project", long_about = None)]
pub struct Cli {
    /// Project name (skips the prompt)
    #[clap(long)]
    pub project_name: Option<String>,

    /// Project description (skips the prompt)
    #[clap(long)]
    pub description: Option<String>,

    /// Author name (skips the prompt)
    #[clap(long)]
    pub author_name: Option<String>,

    /// Author email (skips the prompt)
    #[clap(long)]
    pub author_email: Option<String>,

    /// Tech stack: 1-5 or one of node, python, node-api, python-only, custom
    #[clap(long)]
    pub tech_stack: Option<TechStack>,

    /// Skip the confirmation prompt
    #[clap(short = 'y', long)]
    pub yes: bool,

    /// Never read from stdin; unset values take their defaults
    #[clap(long)]
    pub non_interactive: bool,

    /// Template root to customize
    #[clap(short = 'C', long, default_value = ".")]
    pub dir: PathBuf,

    /// Do not initialize a git repository
    #[clap(long)]
    pub no_git: bool,

    /// Alternate defaults file
    #[clap(long)]
    pub config: Option<PathBuf>,

    #[clap(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn overrides(&self) -> ProjectOverrides {
        ProjectOverrides {
            name: self.project_name.clone(),
            description: self.description.clone(),
            author_name: self.author_name.clone(),
            author_email: self.author_email.clone(),
            tech_stack: self.tech_stack,
        }
    }

    pub fn options(&self) -> SetupOptions {
        SetupOptions {
            root: self.dir.clone(),
            assume_yes: self.yes,
            interactive: !self.non_interactive,
            init_git: !self.no_git,
        }
    }
}
