//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::{DEFAULT_CAPTURE_INTERVAL_MS, DEFAULT_MAX_ENTRIES};
use crate::infrastructure::ClipboardBackend;

/// clipkeep - clipboard history daemon
#[derive(Parser, Debug)]
#[command(name = "clipkeep")]
#[command(version)]
#[command(about = "Clipboard history with selection, bulk copy and secret masking")]
#[command(long_about = None)]
pub struct Cli {
    /// Lay the history list out for a tall display
    #[arg(long, conflicts_with = "landscape")]
    pub portrait: bool,

    /// Lay the history list out for a wide display
    #[arg(long)]
    pub landscape: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/clipkeep/config.json)
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        env = "CLIPKEEP_CONFIG",
        global = true
    )]
    pub config_path: Option<PathBuf>,

    /// Capture interval in milliseconds, used when the file has none
    #[arg(
        long = "ms",
        value_name = "MS",
        default_value_t = DEFAULT_CAPTURE_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(30..)
    )]
    pub capture_interval_ms: u64,

    /// History size, used when the file has none
    #[arg(
        long = "entries",
        value_name = "N",
        default_value_t = DEFAULT_MAX_ENTRIES as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_entries: u64,

    /// Show desktop notifications
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Clipboard access method
    #[arg(long, value_name = "BACKEND", default_value = "arboard")]
    pub clipboard_backend: BackendArg,

    /// Control subcommand; without one the daemon runs in the foreground
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the history, newest first
    List,
    /// Print the full value of one entry
    Show {
        /// Display position (1 is the newest entry)
        position: usize,
    },
    /// Mark entries as selected
    Select {
        #[arg(required = true, value_name = "POS")]
        positions: Vec<usize>,
    },
    /// Clear the selection mark on entries
    Deselect {
        #[arg(required = true, value_name = "POS")]
        positions: Vec<usize>,
    },
    /// Select every entry
    SelectAll,
    /// Copy the selected entries to the clipboard, newest first
    Copy,
    /// Delete the selected entries
    Delete,
    /// Change a setting on the running daemon
    Set {
        #[command(subcommand)]
        setting: SetAction,
    },
    /// Write history and settings to the config file
    Save,
    /// Show daemon status
    Status,
    /// Save and stop the daemon
    Quit,
    /// Inspect the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Settings changeable at runtime
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SetAction {
    /// Capture interval in milliseconds (at least 30)
    Interval { value: String },
    /// Maximum number of history entries
    Entries { value: String },
    /// Dark theme on, off or toggle (true/false, yes/no, on/off, 1/0)
    DarkMode { value: String },
}

/// Config action subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// List settings stored in the config file
    List,
    /// Show config file path
    Path,
}

/// Clipboard backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Arboard,
    Wayland,
}

impl From<BackendArg> for ClipboardBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Arboard => ClipboardBackend::Arboard,
            BackendArg::Wayland => ClipboardBackend::Wayland,
        }
    }
}

/// Requested list orientation
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    Auto,
    Portrait,
    Landscape,
}

impl Orientation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Parsed daemon options
#[derive(Debug, Clone)]
pub struct DaemonOptions {
    pub config_path: Option<PathBuf>,
    pub capture_interval_ms: u64,
    pub max_entries: usize,
    pub notify: bool,
    pub backend: ClipboardBackend,
    pub orientation: Orientation,
}

impl Cli {
    pub fn orientation(&self) -> Orientation {
        if self.portrait {
            Orientation::Portrait
        } else if self.landscape {
            Orientation::Landscape
        } else {
            Orientation::Auto
        }
    }

    pub fn daemon_options(&self) -> DaemonOptions {
        DaemonOptions {
            config_path: self.config_path.clone(),
            capture_interval_ms: self.capture_interval_ms,
            max_entries: usize::try_from(self.max_entries).unwrap_or(usize::MAX),
            notify: self.notify,
            backend: self.clipboard_backend.into(),
            orientation: self.orientation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["clipkeep"]);
        assert!(!cli.portrait);
        assert!(!cli.landscape);
        assert!(!cli.notify);
        assert_eq!(cli.capture_interval_ms, 1000);
        assert_eq!(cli.max_entries, 100);
        assert_eq!(cli.clipboard_backend, BackendArg::Arboard);
        assert!(cli.command.is_none());
        assert_eq!(cli.orientation(), Orientation::Auto);
    }

    #[test]
    fn cli_parses_daemon_flags() {
        let cli = Cli::parse_from([
            "clipkeep",
            "--portrait",
            "-f",
            "/tmp/clips.json",
            "--ms",
            "250",
            "--entries",
            "20",
            "-n",
            "--clipboard-backend",
            "wayland",
        ]);
        let options = cli.daemon_options();
        assert_eq!(options.orientation, Orientation::Portrait);
        assert_eq!(options.config_path, Some(PathBuf::from("/tmp/clips.json")));
        assert_eq!(options.capture_interval_ms, 250);
        assert_eq!(options.max_entries, 20);
        assert!(options.notify);
        assert_eq!(options.backend, ClipboardBackend::Wayland);
    }

    #[test]
    fn orientation_flags_conflict() {
        assert!(Cli::try_parse_from(["clipkeep", "--portrait", "--landscape"]).is_err());
    }

    #[test]
    fn interval_flag_has_a_floor() {
        assert!(Cli::try_parse_from(["clipkeep", "--ms", "10"]).is_err());
        assert!(Cli::try_parse_from(["clipkeep", "--ms", "30"]).is_ok());
    }

    #[test]
    fn entries_flag_must_be_positive() {
        assert!(Cli::try_parse_from(["clipkeep", "--entries", "0"]).is_err());
    }

    #[test]
    fn cli_parses_select_positions() {
        let cli = Cli::parse_from(["clipkeep", "select", "1", "4", "7"]);
        assert_eq!(
            cli.command,
            Some(Commands::Select {
                positions: vec![1, 4, 7]
            })
        );
    }

    #[test]
    fn select_requires_a_position() {
        assert!(Cli::try_parse_from(["clipkeep", "select"]).is_err());
        assert!(Cli::try_parse_from(["clipkeep", "deselect", "x"]).is_err());
    }

    #[test]
    fn cli_parses_set_dark_mode() {
        let cli = Cli::parse_from(["clipkeep", "set", "dark-mode", "on"]);
        assert_eq!(
            cli.command,
            Some(Commands::Set {
                setting: SetAction::DarkMode {
                    value: "on".to_string()
                }
            })
        );
    }

    #[test]
    fn set_interval_keeps_raw_text() {
        // validation happens in the daemon so its message reaches the user
        let cli = Cli::parse_from(["clipkeep", "set", "interval", "ten"]);
        assert_eq!(
            cli.command,
            Some(Commands::Set {
                setting: SetAction::Interval {
                    value: "ten".to_string()
                }
            })
        );
    }

    #[test]
    fn config_file_flag_is_global() {
        let cli = Cli::parse_from(["clipkeep", "config", "path", "-f", "/tmp/c.json"]);
        assert_eq!(cli.config_path, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Path
            })
        );
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
