//! Display labels for history entries

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// Maximum number of characters of an entry shown in a label
pub const MAX_LABEL_CHARS: usize = 200;

/// Visible replacement for newlines inside a label
const NEWLINE_ESCAPE: &str = "\\n";

/// One rendered row of the history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    /// 1-based display position
    pub position: usize,
    pub label: String,
    pub selected: bool,
}

/// Build the label for an entry at a display position.
///
/// Newlines are escaped first, the result is cut to `MAX_LABEL_CHARS`
/// characters, then every `(secret, mask)` pair is replaced literally.
pub fn render_label(value: &str, position: usize, secrets: &BTreeMap<String, String>) -> String {
    let escaped = value.replace('\n', NEWLINE_ESCAPE);
    let mut label = truncate_chars(&escaped, MAX_LABEL_CHARS).to_string();
    for (secret, mask) in secrets {
        if !secret.is_empty() {
            label = label.replace(secret.as_str(), mask);
        }
    }
    format!("{}.  {}", position, label)
}

/// Render a full row for an entry
pub fn render_line(
    entry: &Entry,
    position: usize,
    secrets: &BTreeMap<String, String>,
) -> RenderedLine {
    RenderedLine {
        position,
        label: render_label(entry.value(), position, secrets),
        selected: entry.is_selected(),
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
