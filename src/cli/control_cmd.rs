//! Control command handler - sends requests to the running daemon via IPC

use super::args::{Commands, SetAction};
use super::ipc::create_ipc_client;
use super::presenter::Presenter;
use super::protocol::{Request, Response};

/// Handle a control subcommand
pub async fn handle_control_command(request: Request, presenter: &Presenter) -> Result<(), String> {
    let client = create_ipc_client();

    if !client.is_daemon_running() {
        return Err("No daemon running. Start with: clipkeep".to_string());
    }

    let response = client
        .send(&request)
        .await
        .map_err(|e| format!("Failed to communicate with daemon: {}", e))?;

    present(response, presenter)
}

/// Translate a parsed subcommand into a daemon request.
///
/// Returns an error for input the daemon would never accept and for
/// subcommands that are handled locally.
pub fn request_for(command: Commands) -> Result<Request, String> {
    let request = match command {
        Commands::List => Request::List,
        Commands::Show { position } => Request::Show { position },
        Commands::Select { positions } => Request::Select { positions },
        Commands::Deselect { positions } => Request::Deselect { positions },
        Commands::SelectAll => Request::SelectAll,
        Commands::Copy => Request::Copy,
        Commands::Delete => Request::Delete,
        Commands::Set { setting } => match setting {
            SetAction::Interval { value } => Request::SetInterval { value },
            SetAction::Entries { value } => Request::SetEntries { value },
            SetAction::DarkMode { value } if value.eq_ignore_ascii_case("toggle") => {
                Request::ToggleDarkMode
            }
            SetAction::DarkMode { value } => Request::SetDarkMode {
                enabled: parse_bool(&value).map_err(|_| {
                    format!(
                        "Invalid dark-mode value '{}'. Use true, false or toggle",
                        value
                    )
                })?,
            },
        },
        Commands::Save => Request::Save,
        Commands::Status => Request::Status,
        Commands::Quit => Request::Quit,
        Commands::Config { .. } => {
            return Err("config commands do not talk to the daemon".to_string())
        }
    };
    Ok(request)
}

fn present(response: Response, presenter: &Presenter) -> Result<(), String> {
    match response {
        Response::Lines { lines, status } => {
            if lines.is_empty() {
                presenter.info("History is empty");
            }
            for line in &lines {
                presenter.history_line(line);
            }
            if !status.is_empty() {
                presenter.info(&status);
            }
        }
        Response::Entry { value, .. } => presenter.output(&value),
        Response::Ok { message }
        | Response::Copied { message, .. }
        | Response::Deleted { message, .. } => presenter.success(&message),
        Response::Status {
            entries,
            capture_interval_ms,
            max_entries,
            dark_mode,
            orientation,
            config_path,
        } => {
            presenter.key_value("entries", &entries.to_string());
            presenter.key_value("captureIntervalMs", &capture_interval_ms.to_string());
            presenter.key_value("maxEntries", &max_entries.to_string());
            presenter.key_value("darkMode", &dark_mode.to_string());
            presenter.key_value("orientation", &orientation);
            presenter.key_value("config", &config_path);
        }
        Response::Error { message } => return Err(message),
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(()),
    }
}
