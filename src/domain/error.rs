//! Domain error types

use thiserror::Error;

/// Error when a user-edited setting is rejected.
/// The previous value is always retained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value for '{field}': {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error when a display position does not refer to an entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No entry at position {position} (history has {len} entries)")]
pub struct PositionOutOfRange {
    pub position: usize,
    pub len: usize,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),
}
