//! Display position <-> storage index translation
//!
//! The history is stored oldest first but displayed newest first.
//! Display positions are 1-based, storage indices are 0-based, and for a
//! log of length `len` they are related by `index = len - position`.

/// Translate a 1-based display position into a storage index.
///
/// Returns `None` for position 0 and for positions past the end of the log,
/// so a display position never maps to a negative index.
pub fn storage_index(len: usize, position: usize) -> Option<usize> {
    if position == 0 || position > len {
        return None;
    }
    Some(len - position)
}

/// Translate a storage index into its 1-based display position.
pub fn display_position(len: usize, index: usize) -> Option<usize> {
    if index >= len {
        return None;
    }
    Some(len - index)
}

/// Number of display positions a bulk operation may visit
pub fn traversal_limit(len: usize, max_entries: usize) -> usize {
    len.min(max_entries)
}
