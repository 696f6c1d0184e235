pub mod cli;
pub mod config;
pub mod project_config;
pub mod project_overrides;
pub mod setup_options;
