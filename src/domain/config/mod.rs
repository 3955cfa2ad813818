//! Configuration domain module

mod app_config;
mod settings;

pub use app_config::AppConfig;
pub use settings::{
    parse_capture_interval, parse_max_entries, Settings, DEFAULT_CAPTURE_INTERVAL_MS,
    DEFAULT_MAX_ENTRIES, MIN_CAPTURE_INTERVAL_MS,
};
