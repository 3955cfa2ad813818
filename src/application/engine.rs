//! History engine: the operations behind every user action
//!
//! The engine is synchronous and lock-free; callers that share it across
//! tasks go through [`HistoryService`](super::HistoryService), which
//! serializes access.

use crate::domain::config::{AppConfig, Settings};
use crate::domain::error::PositionOutOfRange;
use crate::domain::history::{position, render_line, EntryLog, RenderedLine};

/// Result of a merge-copy of the selected entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyOutcome {
    /// Selected values joined by newlines, newest first
    pub text: String,
    pub items_copied: usize,
    /// Number of entries visited (and deselected)
    pub visited: usize,
    /// Byte length of every visited entry
    pub total_bytes: usize,
    /// History length when the copy ran
    pub history_len: usize,
}

impl CopyOutcome {
    /// True when no entry was selected; nothing should reach the clipboard
    pub fn is_empty(&self) -> bool {
        self.items_copied == 0
    }

    pub fn status_message(&self) -> String {
        if self.is_empty() {
            return "nothing to copy".to_string();
        }
        format!(
            "{}/{} items copied, {} bytes ({} bytes in history)",
            self.items_copied,
            self.history_len,
            self.text.len(),
            self.total_bytes
        )
    }
}

/// Result of deleting the selected entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted: usize,
    /// History length before the delete
    pub history_len: usize,
}

impl DeleteOutcome {
    pub fn status_message(&self) -> String {
        format!("{}/{} items deleted", self.deleted, self.history_len)
    }
}

/// Owns the history log and the settings it is bounded by
#[derive(Debug, Clone, Default)]
pub struct HistoryEngine {
    log: EntryLog,
    settings: Settings,
}

impl HistoryEngine {
    pub fn new(log: EntryLog, settings: Settings) -> Self {
        Self { log, settings }
    }

    /// Build an engine from a loaded document.
    ///
    /// A log longer than `max_entries` keeps only its newest entries.
    pub fn from_config(config: AppConfig) -> Self {
        let (mut log, settings) = config.into_parts();
        log.evict_excess(settings.max_entries);
        Self { log, settings }
    }

    pub fn log(&self) -> &EntryLog {
        &self.log
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Document to persist
    pub fn to_config(&self) -> AppConfig {
        AppConfig::from_parts(&self.log, &self.settings)
    }

    /// Add a clipboard sample to the history.
    ///
    /// Returns true only when the log changed; empty text and a repeat of
    /// the latest entry are ignored.
    pub fn ingest(&mut self, raw: &str) -> bool {
        if raw.is_empty() {
            return false;
        }
        self.log.append(raw, self.settings.max_entries)
    }

    /// Render every entry, newest first
    pub fn render_lines(&self) -> Vec<RenderedLine> {
        self.log
            .snapshot()
            .enumerate()
            .map(|(i, entry)| render_line(entry, i + 1, &self.settings.secrets))
            .collect()
    }

    /// Full value of the entry at a display position
    pub fn value_at(&self, display_position: usize) -> Result<&str, PositionOutOfRange> {
        self.resolve(display_position)
            .and_then(|index| self.log.get(index))
            .map(|entry| entry.value())
            .ok_or(PositionOutOfRange {
                position: display_position,
                len: self.log.len(),
            })
    }

    /// Set the selection flag of the entry at a display position
    pub fn set_selected(
        &mut self,
        display_position: usize,
        selected: bool,
    ) -> Result<(), PositionOutOfRange> {
        let len = self.log.len();
        match self.resolve(display_position) {
            Some(index) if self.log.set_selected(index, selected) => Ok(()),
            _ => Err(PositionOutOfRange {
                position: display_position,
                len,
            }),
        }
    }

    /// Join the selected entries into one text and deselect every visited entry.
    ///
    /// Positions are visited newest first, up to `max_entries` of them.
    pub fn copy_selected(&mut self) -> CopyOutcome {
        let len = self.log.len();
        let limit = position::traversal_limit(len, self.settings.max_entries);
        let mut outcome = CopyOutcome {
            history_len: len,
            ..CopyOutcome::default()
        };

        for display_position in 1..=limit {
            let Some(index) = position::storage_index(len, display_position) else {
                break;
            };
            let Some(entry) = self.log.get(index) else {
                break;
            };

            if entry.is_selected() {
                outcome.text.push_str(entry.value());
                outcome.text.push('\n');
                outcome.items_copied += 1;
            }
            outcome.total_bytes += entry.byte_len();
            outcome.visited += 1;
            self.log.clear_selection(index);
        }

        if outcome.text.ends_with('\n') {
            outcome.text.pop();
        }
        outcome
    }

    /// Remove every selected entry within the first `max_entries` positions
    pub fn delete_selected(&mut self) -> DeleteOutcome {
        let len = self.log.len();
        let limit = position::traversal_limit(len, self.settings.max_entries);

        let mut doomed: Vec<usize> = (1..=limit)
            .map_while(|display_position| position::storage_index(len, display_position))
            .filter(|&index| self.log.get(index).is_some_and(|e| e.is_selected()))
            .collect();
        doomed.sort_unstable();

        let deleted = self.log.delete_at(doomed);
        DeleteOutcome {
            deleted,
            history_len: len,
        }
    }

    /// Select every entry in the history
    pub fn select_all(&mut self) {
        self.log.select_all();
    }

    fn resolve(&self, display_position: usize) -> Option<usize> {
        position::storage_index(self.log.len(), display_position)
    }
}
