//! clipkeep - clipboard history manager
//!
//! A daemon samples the system clipboard, keeps a bounded, de-duplicated
//! history, and lets control clients select, merge-copy and delete entries
//! over a local socket. History and settings persist to a JSON file.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Entries, the history log, rendering, settings and errors
//! - **Application**: History engine, serialized service, poll loop and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (clipboard, config file, display, notifications)
//! - **CLI**: Argument parsing, daemon runner, IPC and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
