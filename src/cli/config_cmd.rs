//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{DEFAULT_CAPTURE_INTERVAL_MS, DEFAULT_MAX_ENTRIES};
use crate::domain::error::ConfigError;

use super::args::ConfigAction;
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    if !store.exists() {
        presenter.warn(&format!(
            "No config file at {}, showing defaults",
            store.path().display()
        ));
    }

    let config = store
        .load()
        .await?
        .with_fallbacks(DEFAULT_CAPTURE_INTERVAL_MS, DEFAULT_MAX_ENTRIES);

    presenter.key_value(
        "captureIntervalMs",
        &config.settings.capture_interval_ms.to_string(),
    );
    presenter.key_value("maxEntries", &config.settings.max_entries.to_string());
    presenter.key_value("darkMode", &config.settings.dark_mode.to_string());
    // only the count; the keys are the secrets themselves
    presenter.key_value("secrets", &describe_count(config.settings.secrets.len(), "mask"));
    presenter.key_value("log", &describe_count(config.log.len(), "entry"));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn describe_count(count: usize, noun: &str) -> String {
    match (count, noun) {
        (1, _) => format!("1 {}", noun),
        (_, "entry") => format!("{} entries", count),
        _ => format!("{} {}s", count, noun),
    }
}
