//! Shared process plumbing: exit codes, logging setup, startup config

use tracing_subscriber::EnvFilter;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "clipkeep=info";

/// Install the stderr tracing subscriber
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load the startup configuration.
///
/// A missing file yields defaults; an unreadable or malformed one is logged
/// and replaced by defaults. Zero interval/entries fall back to the flag
/// values.
pub async fn load_config<S: ConfigStore + ?Sized>(
    store: &S,
    capture_interval_ms: u64,
    max_entries: usize,
) -> AppConfig {
    let config = match store.load().await {
        Ok(config) => {
            tracing::info!(
                path = %store.path().display(),
                entries = config.log.len(),
                "loaded config"
            );
            config
        }
        Err(e) => {
            tracing::warn!(path = %store.path().display(), error = %e, "using default config");
            AppConfig::empty()
        }
    };
    config.with_fallbacks(capture_interval_ms, max_entries)
}
