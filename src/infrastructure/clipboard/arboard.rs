//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;

use crate::application::ports::{ClipboardError, ClipboardIo};

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn open() -> Result<arboard::Clipboard, ClipboardError> {
    arboard::Clipboard::new().map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))
}

#[async_trait]
impl ClipboardIo for ArboardClipboard {
    async fn read_all(&self) -> Result<String, ClipboardError> {
        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(|| {
            open()?
                .get_text()
                .map_err(|e| ClipboardError::ReadFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }

    async fn write_all(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            open()?
                .set_text(&text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_creates_successfully() {
        let _clipboard = ArboardClipboard::new();
    }

    #[test]
    fn clipboard_default_creates() {
        let _clipboard = ArboardClipboard::default();
    }
}
