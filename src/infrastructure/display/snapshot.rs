//! Headless display that keeps the latest rendering in memory
//!
//! The daemon has no window; control clients read the list from here.

use std::sync::RwLock;

use crate::application::ports::Display;
use crate::domain::history::RenderedLine;

#[derive(Debug, Default)]
struct View {
    lines: Vec<RenderedLine>,
    top_line: usize,
    status: String,
}

/// In-memory display surface
#[derive(Debug, Default)]
pub struct SnapshotDisplay {
    view: RwLock<View>,
}

impl SnapshotDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines from the most recent rebuild
    pub fn lines(&self) -> Vec<RenderedLine> {
        self.read(|view| view.lines.clone())
    }

    /// Latest status message
    pub fn status(&self) -> String {
        self.read(|view| view.status.clone())
    }

    fn read<T>(&self, f: impl FnOnce(&View) -> T) -> T {
        // a poisoned lock still holds a complete view
        let guard = self.view.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    fn write(&self, f: impl FnOnce(&mut View)) {
        let mut guard = self.view.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard);
    }
}

impl Display for SnapshotDisplay {
    fn rebuild_list(&self, lines: &[RenderedLine]) {
        self.write(|view| {
            view.lines = lines.to_vec();
            view.top_line = view.top_line.min(lines.len());
            if view.top_line == 0 && !lines.is_empty() {
                view.top_line = 1;
            }
        });
    }

    fn top_line(&self) -> usize {
        self.read(|view| view.top_line)
    }

    fn set_top_line(&self, line: usize) {
        self.write(|view| view.top_line = line.min(view.lines.len()));
    }

    fn set_status(&self, message: &str) {
        self.write(|view| view.status = message.to_string());
    }
}
