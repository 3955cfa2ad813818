//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard, the filesystem, and the
//! desktop notification service.

pub mod clipboard;
pub mod config;
pub mod display;
pub mod notification;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard, ClipboardBackend, WaylandClipboard};
pub use config::XdgConfigStore;
pub use display::SnapshotDisplay;
pub use notification::{create_notifier, NoOpNotifier, NotifyRustNotifier};
