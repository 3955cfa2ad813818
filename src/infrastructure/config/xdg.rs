//! XDG config store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Directory name under the user config dir
const APP_DIR: &str = "clipkeep";

/// File name of the JSON document
const CONFIG_FILE: &str = "config.json";

/// XDG-compliant JSON config store
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Create a new XDG config store with default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join(APP_DIR);

        Self {
            path: config_dir.join(CONFIG_FILE),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `path` when given, otherwise the XDG default
    pub fn resolve(path: Option<PathBuf>) -> Self {
        path.map(Self::with_path).unwrap_or_default()
    }

    /// Parse JSON content into AppConfig
    fn parse_json(content: &str) -> Result<AppConfig, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize AppConfig to JSON
    fn to_json(config: &AppConfig) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            // Return empty config if file doesn't exist
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", self.path.display(), e)))?;

        Self::parse_json(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                ConfigError::WriteError(format!("{}: {}", parent.display(), e))
            })?;
        }

        let content = Self::to_json(config)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(format!("{}: {}", self.path.display(), e)))?;

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::config::Settings;
    use crate::domain::history::EntryLog;

    #[test]
    fn default_path_is_xdg() {
        let store = XdgConfigStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("clipkeep"));
        assert!(path.to_string_lossy().ends_with("config.json"));
    }

    #[test]
    fn custom_path() {
        let store = XdgConfigStore::with_path("/custom/path/config.json");
        assert_eq!(store.path(), PathBuf::from("/custom/path/config.json"));
    }

    #[test]
    fn resolve_prefers_explicit_path() {
        let store = XdgConfigStore::resolve(Some(PathBuf::from("/tmp/x.json")));
        assert_eq!(store.path(), PathBuf::from("/tmp/x.json"));
        assert_eq!(XdgConfigStore::resolve(None).path(), XdgConfigStore::new().path());
    }

    #[test]
    fn parse_json_rejects_malformed_content() {
        let err = XdgConfigStore::parse_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[tokio::test]
    async fn load_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("absent.json"));
        let config = store.load().await.unwrap();
        assert_eq!(config, AppConfig::empty());
    }

    #[tokio::test]
    async fn save_creates_parent_dirs_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("nested/clipkeep/config.json"));

        let mut log = EntryLog::new();
        log.append("alpha", 10);
        log.append("beta", 10);
        log.set_selected(1, true);
        let mut secrets = BTreeMap::new();
        secrets.insert("pw".to_string(), "**".to_string());
        let settings = Settings {
            capture_interval_ms: 250,
            max_entries: 10,
            dark_mode: true,
            secrets,
        };
        let config = AppConfig::from_parts(&log, &settings);

        store.save(&config).await.unwrap();
        assert!(store.exists());
        assert_eq!(store.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let err = XdgConfigStore::with_path(path).load().await.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn to_json_uses_file_layout_keys() {
        let json = XdgConfigStore::to_json(&AppConfig::empty()).unwrap();
        for key in ["\"log\"", "\"captureIntervalMs\"", "\"maxEntries\"", "\"darkMode\"", "\"secrets\""] {
            assert!(json.contains(key), "missing {} in {}", key, json);
        }
    }
}
