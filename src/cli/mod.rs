//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling, the
//! daemon runner and the control client that talks to it.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod control_cmd;
pub mod daemon_app;
pub mod ipc;
pub mod pid_file;
pub mod presenter;
pub mod protocol;
pub mod signals;

use std::path::PathBuf;

// Re-export commonly used types
pub use app::{init_logging, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, DaemonOptions, SetAction};
pub use daemon_app::run_daemon;
pub use control_cmd::{handle_control_command, request_for};
pub use presenter::Presenter;

/// Per-user runtime directory holding the socket and PID file
pub(crate) fn runtime_dir() -> PathBuf {
    dirs::runtime_dir().unwrap_or_else(std::env::temp_dir)
}
