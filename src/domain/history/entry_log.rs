//! Bounded, deduplicating clipboard log

use std::collections::BTreeSet;
use std::iter::Rev;
use std::slice;

use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// Newest-first view over the log, restartable by cloning
pub type Snapshot<'a> = Rev<slice::Iter<'a, Entry>>;

/// Ordered clipboard history, oldest entry first.
///
/// Invariants:
/// - no two adjacent entries share a value
/// - after `append` settles, `len() <= capacity` for the capacity it was given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryLog {
    entries: Vec<Entry>,
}

impl EntryLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from previously persisted entries.
    ///
    /// Adjacent duplicates in the input are collapsed so that a hand-edited
    /// file cannot break the dedup invariant.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut log = Self::new();
        for entry in entries {
            if log.last_value() != Some(entry.value()) {
                log.entries.push(entry);
            }
        }
        log
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the most recent entry
    pub fn last_value(&self) -> Option<&str> {
        self.entries.last().map(Entry::value)
    }

    /// Entry at a storage index
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Append a value unless it equals the most recent entry.
    ///
    /// Returns false when the value was dropped as an adjacent duplicate.
    /// After a successful append the oldest entries are evicted until the
    /// log holds at most `capacity` entries.
    pub fn append(&mut self, value: impl Into<String>, capacity: usize) -> bool {
        let value = value.into();
        if self.last_value() == Some(value.as_str()) {
            return false;
        }

        self.entries.push(Entry::new(value));
        self.evict_excess(capacity);
        true
    }

    /// Drop the oldest entries until at most `capacity` remain.
    /// Returns the number of entries evicted.
    pub fn evict_excess(&mut self, capacity: usize) -> usize {
        let excess = self.entries.len().saturating_sub(capacity);
        if excess > 0 {
            self.entries.drain(..excess);
        }
        excess
    }

    /// Remove the entries at the given storage indices.
    ///
    /// Indices are removed from highest to lowest so earlier removals never
    /// shift later ones. Duplicates and out-of-range indices are ignored.
    /// Returns the number of entries removed.
    pub fn delete_at<I>(&mut self, indices: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let unique: BTreeSet<usize> = indices.into_iter().collect();
        let mut removed = 0;
        for index in unique.into_iter().rev() {
            if index < self.entries.len() {
                self.entries.remove(index);
                removed += 1;
            }
        }
        removed
    }

    /// Mark every entry as selected
    pub fn select_all(&mut self) {
        for entry in &mut self.entries {
            entry.set_selected(true);
        }
    }

    /// Deselect a single entry. Returns false if the index is out of range.
    pub fn clear_selection(&mut self, index: usize) -> bool {
        self.set_selected(index, false)
    }

    /// Set the selection flag of a single entry
    pub fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.set_selected(selected);
                true
            }
            None => false,
        }
    }

    /// Number of currently selected entries
    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_selected()).count()
    }

    /// Iterate entries newest first
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.entries.iter().rev()
    }
}
