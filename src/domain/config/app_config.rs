//! Persisted application document

use serde::{Deserialize, Serialize};

use super::settings::{null_as_default, Settings, MIN_CAPTURE_INTERVAL_MS};
use crate::domain::history::{Entry, EntryLog};

/// Everything written to the config file: the history plus the settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub log: Vec<Entry>,
    #[serde(flatten)]
    pub settings: Settings,
}

impl AppConfig {
    /// Create an empty document (no history, zeroed settings)
    pub fn empty() -> Self {
        Self {
            log: Vec::new(),
            settings: Settings {
                capture_interval_ms: 0,
                max_entries: 0,
                ..Settings::default()
            },
        }
    }

    /// Build a document from the live history and settings
    pub fn from_parts(log: &EntryLog, settings: &Settings) -> Self {
        Self {
            log: log.entries().to_vec(),
            settings: settings.clone(),
        }
    }

    /// Replace zero values with the given fallbacks.
    ///
    /// The fallbacks normally come from the command line, which itself
    /// defaults to [`DEFAULT_CAPTURE_INTERVAL_MS`](super::DEFAULT_CAPTURE_INTERVAL_MS)
    /// and [`DEFAULT_MAX_ENTRIES`](super::DEFAULT_MAX_ENTRIES). A hand-edited
    /// interval below [`MIN_CAPTURE_INTERVAL_MS`] is raised to it.
    pub fn with_fallbacks(mut self, capture_interval_ms: u64, max_entries: usize) -> Self {
        if self.settings.capture_interval_ms == 0 {
            self.settings.capture_interval_ms = capture_interval_ms;
        }
        self.settings.capture_interval_ms =
            self.settings.capture_interval_ms.max(MIN_CAPTURE_INTERVAL_MS);
        if self.settings.max_entries == 0 {
            self.settings.max_entries = max_entries;
        }
        self
    }

    /// Split into a history log and settings
    pub fn into_parts(self) -> (EntryLog, Settings) {
        (EntryLog::from_entries(self.log), self.settings)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn parses_existing_file_layout() {
        let json = r#"{
            "log": [{"Value": "a", "Selected": false}, {"Value": "b", "Selected": true}],
            "captureIntervalMs": 250,
            "maxEntries": 20,
            "darkMode": true,
            "secrets": {"hunter2": "***"}
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.log.len(), 2);
        assert!(config.log[1].is_selected());
        assert_eq!(config.settings.capture_interval_ms, 250);
        assert_eq!(config.settings.max_entries, 20);
        assert!(config.settings.dark_mode);
        assert_eq!(config.settings.secrets.get("hunter2"), Some(&"***".to_string()));
    }

    #[test]
    fn missing_fields_fall_back() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        let config = config.with_fallbacks(1000, 100);
        assert!(config.log.is_empty());
        assert_eq!(config.settings.capture_interval_ms, 1000);
        assert_eq!(config.settings.max_entries, 100);
        assert!(config.settings.secrets.is_empty());
    }

    #[test]
    fn null_log_is_empty() {
        let config: AppConfig = serde_json::from_str(r#"{"log": null}"#).unwrap();
        assert!(config.log.is_empty());
    }

    #[test]
    fn fallbacks_do_not_override_configured_values() {
        let config = AppConfig {
            settings: Settings {
                capture_interval_ms: 40,
                max_entries: 5,
                ..Settings::default()
            },
            ..AppConfig::empty()
        };
        let config = config.with_fallbacks(1000, 100);
        assert_eq!(config.settings.capture_interval_ms, 40);
        assert_eq!(config.settings.max_entries, 5);
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let mut log = EntryLog::new();
        log.append("first", 10);
        log.append("second\nline", 10);
        log.set_selected(0, true);
        let mut secrets = BTreeMap::new();
        secrets.insert("token".to_string(), "[redacted]".to_string());
        let settings = Settings {
            capture_interval_ms: 500,
            max_entries: 10,
            dark_mode: true,
            secrets,
        };

        let config = AppConfig::from_parts(&log, &settings);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);

        let (parsed_log, parsed_settings) = parsed.into_parts();
        assert_eq!(parsed_log, log);
        assert_eq!(parsed_settings, settings);
    }

    #[test]
    fn tiny_interval_is_raised_to_floor() {
        let mut config = AppConfig::empty();
        config.settings.capture_interval_ms = 5;
        let config = config.with_fallbacks(1000, 100);
        assert_eq!(config.settings.capture_interval_ms, MIN_CAPTURE_INTERVAL_MS);
    }

    #[test]
    fn empty_has_zeroed_settings() {
        let config = AppConfig::empty();
        assert_eq!(config.settings.capture_interval_ms, 0);
        assert_eq!(config.settings.max_entries, 0);
    }
}
