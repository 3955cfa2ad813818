//! Settings controller: validates user edits before they reach the engine

use crate::domain::config::{parse_capture_interval, parse_max_entries, Settings};
use crate::domain::error::ValidationError;

/// Applies user-edited settings.
///
/// Rejected input leaves the previous value in place. Lowering
/// `max_entries` does not trim the history; the next successful append
/// evicts down to the new ceiling.
#[derive(Debug, Default)]
pub struct SettingsController {
    dark_mode_changed: bool,
}

impl SettingsController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a new capture interval
    pub fn apply_poll_interval(
        &self,
        settings: &mut Settings,
        raw: &str,
    ) -> Result<u64, ValidationError> {
        let interval = parse_capture_interval(raw)?;
        settings.capture_interval_ms = interval;
        Ok(interval)
    }

    /// Validate and store a new history ceiling
    pub fn apply_max_entries(
        &self,
        settings: &mut Settings,
        raw: &str,
    ) -> Result<usize, ValidationError> {
        let max_entries = parse_max_entries(raw)?;
        settings.max_entries = max_entries;
        Ok(max_entries)
    }

    /// Store the theme preference.
    ///
    /// Returns true the first time the value actually changes in this
    /// session, when the user should be told a restart is required.
    pub fn set_dark_mode(&mut self, settings: &mut Settings, dark_mode: bool) -> bool {
        if settings.dark_mode == dark_mode {
            return false;
        }
        settings.dark_mode = dark_mode;
        let first_change = !self.dark_mode_changed;
        self.dark_mode_changed = true;
        first_change
    }

    /// Flip the theme preference; same return value as [`Self::set_dark_mode`]
    pub fn toggle_dark_mode(&mut self, settings: &mut Settings) -> bool {
        let dark_mode = !settings.dark_mode;
        self.set_dark_mode(settings, dark_mode)
    }
}
