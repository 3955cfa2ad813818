//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod display;
pub mod notifier;

// Re-export common types
pub use clipboard::{ClipboardError, ClipboardIo};
pub use config::ConfigStore;
pub use display::Display;
pub use notifier::{NotificationError, NotificationIcon, Notifier};
