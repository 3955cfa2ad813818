//! Clipboard entry value object

use serde::{Deserialize, Serialize};

/// One clipboard snapshot plus its selection flag.
///
/// The value never changes once created; only `selected` is toggled.
/// Field names are capitalized on disk to stay compatible with existing
/// config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Value")]
    value: String,
    #[serde(rename = "Selected", default)]
    selected: bool,
}

impl Entry {
    /// Create a new, unselected entry
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            selected: false,
        }
    }

    /// Get the raw clipboard text
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Size of the raw value in bytes
    pub fn byte_len(&self) -> usize {
        self.value.len()
    }
}
