//! Clipboard history domain module

mod entry;
mod entry_log;
pub mod position;
mod render;

pub use entry::Entry;
pub use entry_log::{EntryLog, Snapshot};
pub use render::{render_label, render_line, RenderedLine, MAX_LABEL_CHARS};
