//! clipkeep CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clipkeep::cli::{
    config_cmd::handle_config_command, handle_control_command, init_logging, request_for,
    run_daemon, Cli, Commands, Presenter, EXIT_ERROR, EXIT_USAGE_ERROR,
};
use clipkeep::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();
    let presenter = Presenter::new();

    match cli.command.clone() {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::resolve(cli.config_path.clone());
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(command) => {
            let request = match request_for(command) {
                Ok(request) => request,
                Err(e) => {
                    presenter.error(&e);
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };
            if let Err(e) = handle_control_command(request, &presenter).await {
                presenter.error(&e);
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        None => run_daemon(cli.daemon_options()).await,
    }
}
