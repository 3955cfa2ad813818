//! Application layer - History operations and port interfaces
//!
//! Contains the engine, the serialized service wrapping it, the poll loop,
//! and trait definitions for external system interactions.

pub mod engine;
pub mod poll;
pub mod ports;
pub mod service;
pub mod settings;

#[cfg(test)]
pub(crate) mod mocks;

// Re-export use cases
pub use engine::{CopyOutcome, DeleteOutcome, HistoryEngine};
pub use poll::{PollLoop, PollState};
pub use service::{HistoryService, ServiceError};
pub use settings::SettingsController;
