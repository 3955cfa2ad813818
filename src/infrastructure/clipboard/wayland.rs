//! Wayland clipboard adapter using wl-paste / wl-copy

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{ClipboardError, ClipboardIo};

/// Wayland clipboard adapter backed by the wl-clipboard tools
pub struct WaylandClipboard;

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_error(tool: &str, e: std::io::Error, wrap: fn(String) -> ClipboardError) -> ClipboardError {
    if e.kind() == std::io::ErrorKind::NotFound {
        ClipboardError::ToolNotFound(tool.to_string())
    } else {
        wrap(e.to_string())
    }
}

#[async_trait]
impl ClipboardIo for WaylandClipboard {
    async fn read_all(&self) -> Result<String, ClipboardError> {
        let output = Command::new("wl-paste")
            .args(["--no-newline", "--type", "text"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| spawn_error("wl-paste", e, ClipboardError::ReadFailed))?;

        // wl-paste exits non-zero when the clipboard is empty
        if !output.status.success() {
            return Err(ClipboardError::ReadFailed(format!(
                "wl-paste exited with status: {}",
                output.status
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| ClipboardError::ReadFailed(format!("clipboard is not UTF-8: {}", e)))
    }

    async fn write_all(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new("wl-copy")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| spawn_error("wl-copy", e, ClipboardError::WriteFailed))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::WriteFailed(format!(
                "wl-copy exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
