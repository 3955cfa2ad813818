//! CLI presenter for output formatting

use colored::*;

use crate::domain::history::RenderedLine;

/// Presenter for CLI output formatting
#[derive(Debug, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (entry values and history lines)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print one history line, marking selected entries
    pub fn history_line(&self, line: &RenderedLine) {
        println!("{}", self.format_line(line));
    }

    pub fn format_line(&self, line: &RenderedLine) -> String {
        if line.selected {
            format!("{} {}", "●".green(), line.label)
        } else {
            format!("  {}", line.label)
        }
    }

    /// Print daemon status
    pub fn daemon_status(&self, state: &str) {
        eprintln!("{} Daemon: {}", "●".cyan(), state);
    }

    /// Print a key-value pair (for config list and status)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}
