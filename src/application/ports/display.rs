//! Display port interface

use std::sync::Arc;

use crate::domain::history::RenderedLine;

/// Rendering surface for the history list.
///
/// Calls are made while the history lock is held, so implementations must
/// not block.
pub trait Display: Send + Sync {
    /// Replace the whole list with freshly rendered lines (newest first).
    fn rebuild_list(&self, lines: &[RenderedLine]);

    /// First visible line of the viewport (1-based, 0 when empty)
    fn top_line(&self) -> usize;

    /// Scroll the viewport so `line` is the first visible line
    fn set_top_line(&self, line: usize);

    /// Show a one-line status message under the list
    fn set_status(&self, message: &str);
}

impl<T: Display + ?Sized> Display for Arc<T> {
    fn rebuild_list(&self, lines: &[RenderedLine]) {
        self.as_ref().rebuild_list(lines)
    }

    fn top_line(&self) -> usize {
        self.as_ref().top_line()
    }

    fn set_top_line(&self, line: usize) {
        self.as_ref().set_top_line(line)
    }

    fn set_status(&self, message: &str) {
        self.as_ref().set_status(message)
    }
}
