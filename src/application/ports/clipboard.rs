//! Clipboard port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("{0} not found. Please install wl-clipboard.")]
    ToolNotFound(String),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Port for reading and writing the system clipboard
#[async_trait]
pub trait ClipboardIo: Send + Sync {
    /// Read the current clipboard text.
    async fn read_all(&self) -> Result<String, ClipboardError>;

    /// Replace the clipboard contents with `text`.
    async fn write_all(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl ClipboardIo for Box<dyn ClipboardIo> {
    async fn read_all(&self) -> Result<String, ClipboardError> {
        self.as_ref().read_all().await
    }

    async fn write_all(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write_all(text).await
    }
}

#[async_trait]
impl<T: ClipboardIo + ?Sized> ClipboardIo for Arc<T> {
    async fn read_all(&self) -> Result<String, ClipboardError> {
        self.as_ref().read_all().await
    }

    async fn write_all(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write_all(text).await
    }
}
