//! Runtime settings value object

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::error::ValidationError;

/// Default interval between clipboard reads
pub const DEFAULT_CAPTURE_INTERVAL_MS: u64 = 1000;

/// Default number of entries kept in the history
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Capture intervals below this would spin the CPU for little benefit
pub const MIN_CAPTURE_INTERVAL_MS: u64 = 30;

/// User-adjustable settings.
///
/// Missing fields deserialize to zero/empty so that
/// [`AppConfig::with_fallbacks`](super::AppConfig::with_fallbacks) can tell
/// them apart from configured values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub capture_interval_ms: u64,
    #[serde(default)]
    pub max_entries: usize,
    #[serde(default)]
    pub dark_mode: bool,
    /// Literal substrings to mask in rendered labels, mapped to their mask.
    /// Only editable by hand in the config file.
    #[serde(default, deserialize_with = "null_as_default")]
    pub secrets: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capture_interval_ms: DEFAULT_CAPTURE_INTERVAL_MS,
            max_entries: DEFAULT_MAX_ENTRIES,
            dark_mode: false,
            secrets: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Capture interval as std Duration
    pub fn capture_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.capture_interval_ms)
    }
}

/// Parse a user-entered capture interval in milliseconds
pub fn parse_capture_interval(raw: &str) -> Result<u64, ValidationError> {
    let value = parse_integer("captureIntervalMs", raw)?;
    if value < MIN_CAPTURE_INTERVAL_MS as i64 {
        return Err(ValidationError::new(
            "captureIntervalMs",
            format!(
                "must be at least {} to avoid excessive CPU usage",
                MIN_CAPTURE_INTERVAL_MS
            ),
        ));
    }
    Ok(value as u64)
}

/// Parse a user-entered maximum history size
pub fn parse_max_entries(raw: &str) -> Result<usize, ValidationError> {
    let value = parse_integer("maxEntries", raw)?;
    if value <= 0 {
        return Err(ValidationError::new(
            "maxEntries",
            "must be greater than 0",
        ));
    }
    usize::try_from(value)
        .map_err(|_| ValidationError::new("maxEntries", "value is too large"))
}

fn parse_integer(field: &str, raw: &str) -> Result<i64, ValidationError> {
    raw.trim().parse::<i64>().map_err(|e| {
        ValidationError::new(field, format!("'{}' is not a whole number ({})", raw, e))
    })
}

/// Treat an explicit JSON `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
