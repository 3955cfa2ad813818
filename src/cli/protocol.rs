//! Wire format between control clients and the daemon
//!
//! One JSON object per line: the client writes a single [`Request`], the
//! daemon answers with a single [`Response`] and closes the connection.

use std::io;

use serde::{Deserialize, Serialize};

use crate::domain::history::RenderedLine;

/// Commands a control client can send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "kebab-case")]
pub enum Request {
    List,
    Show { position: usize },
    Select { positions: Vec<usize> },
    Deselect { positions: Vec<usize> },
    SelectAll,
    Copy,
    Delete,
    SetInterval { value: String },
    SetEntries { value: String },
    SetDarkMode { enabled: bool },
    ToggleDarkMode,
    Save,
    Status,
    Quit,
}

/// Daemon answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Response {
    Ok {
        message: String,
    },
    Lines {
        lines: Vec<RenderedLine>,
        status: String,
    },
    Entry {
        position: usize,
        value: String,
    },
    Copied {
        items: usize,
        bytes: usize,
        message: String,
    },
    Deleted {
        count: usize,
        message: String,
    },
    Status {
        entries: usize,
        capture_interval_ms: u64,
        max_entries: usize,
        dark_mode: bool,
        orientation: String,
        config_path: String,
    },
    Error {
        message: String,
    },
}

impl Response {
    pub fn ok(message: impl Into<String>) -> Self {
        Self::Ok {
            message: message.into(),
        }
    }

    pub fn error(message: impl ToString) -> Self {
        Self::Error {
            message: message.to_string(),
        }
    }
}

/// Serialize a message as one newline-terminated JSON line
pub fn encode<T: Serialize>(message: &T) -> io::Result<String> {
    let mut line = serde_json::to_string(message).map_err(io::Error::other)?;
    line.push('\n');
    Ok(line)
}

/// Parse one JSON line
pub fn decode<'a, T: Deserialize<'a>>(line: &'a str) -> io::Result<T> {
    serde_json::from_str(line.trim_end())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
