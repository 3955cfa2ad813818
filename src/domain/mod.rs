//! Domain layer - Core history logic
//!
//! Contains value objects, the entry log, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod history;

// Re-export common types
pub use config::{AppConfig, Settings};
pub use error::*;
pub use history::{Entry, EntryLog, RenderedLine};
