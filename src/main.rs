use clap::Parser;
use template_setup::config::config_manager::ConfigManager;
use template_setup::errors::{ErrorHandler, SetupError, SetupResult};
use template_setup::helpers::prompter::Prompter;
use template_setup::logger::setup_logger::SetupLogger;
use template_setup::services::tool_probe::ToolProbe;
use template_setup::structs::cli::Cli;
use template_setup::workers::command_runner::CommandRunner;

fn main() {
    let cli = Cli::parse();
    SetupLogger::init(cli.verbose);

    if let Err(error) = run(&cli) {
        // Cancellation already printed its own message.
        if !matches!(error, SetupError::Cancelled) {
            ErrorHandler::handle_error(&error);
        }
        std::process::exit(error.exit_code());
    }
}

fn run(cli: &Cli) -> SetupResult<()> {
    let defaults = ConfigManager::load(cli.config.as_deref())?;
    let manifest_writer = ToolProbe::manifest_writer();

    let mut runner = CommandRunner::new(Prompter::stdio(), cli.options(), manifest_writer);
    runner.run(&cli.overrides(), &defaults)?;

    Ok(())
}
