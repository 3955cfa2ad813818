//! History service: serialized access to the engine
//!
//! Every operation takes the single history lock for its whole duration,
//! including the display rebuild, so the poll loop can never interleave
//! with a copy or delete and readers never see a half-applied change.
//! Clipboard and config I/O happen outside the lock.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::config::{AppConfig, Settings};
use crate::domain::error::{ConfigError, PositionOutOfRange, ValidationError};
use crate::domain::history::RenderedLine;

use super::engine::{CopyOutcome, DeleteOutcome, HistoryEngine};
use super::ports::{ClipboardError, ClipboardIo, ConfigStore, Display, NotificationIcon, Notifier};
use super::settings::SettingsController;

/// Title used for every notification
const NOTIFY_TITLE: &str = "clipkeep";

/// Errors from history operations
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Position(#[from] PositionOutOfRange),
}

struct HistoryState {
    engine: HistoryEngine,
    controller: SettingsController,
}

/// Shared front door to the history engine
pub struct HistoryService<C, D, N>
where
    C: ClipboardIo,
    D: Display,
    N: Notifier,
{
    state: Mutex<HistoryState>,
    clipboard: C,
    display: D,
    notifier: N,
}

impl<C, D, N> HistoryService<C, D, N>
where
    C: ClipboardIo,
    D: Display,
    N: Notifier,
{
    pub fn new(engine: HistoryEngine, clipboard: C, display: D, notifier: N) -> Self {
        Self {
            state: Mutex::new(HistoryState {
                engine,
                controller: SettingsController::new(),
            }),
            clipboard,
            display,
            notifier,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Push the current history to the display
    pub async fn refresh(&self) {
        let state = self.state.lock().await;
        self.rebuild(&state.engine);
    }

    /// Read the clipboard once and ingest whatever it holds
    pub async fn sample(&self) -> Result<bool, ClipboardError> {
        let raw = self.clipboard.read_all().await?;
        Ok(self.ingest(&raw).await)
    }

    /// Add a clipboard value; the display is rebuilt only when it was stored
    pub async fn ingest(&self, raw: &str) -> bool {
        let mut state = self.state.lock().await;
        let appended = state.engine.ingest(raw);
        if appended {
            tracing::debug!(bytes = raw.len(), len = state.engine.log().len(), "captured clipboard entry");
            self.rebuild(&state.engine);
        }
        appended
    }

    /// Rendered history, newest first
    pub async fn lines(&self) -> Vec<RenderedLine> {
        self.state.lock().await.engine.render_lines()
    }

    /// Full value of the entry at a display position
    pub async fn entry(&self, position: usize) -> Result<String, ServiceError> {
        let state = self.state.lock().await;
        Ok(state.engine.value_at(position)?.to_string())
    }

    /// Select or deselect entries by display position.
    ///
    /// Either every position is valid and applied, or nothing changes.
    pub async fn select(&self, positions: &[usize], selected: bool) -> Result<usize, ServiceError> {
        let mut state = self.state.lock().await;
        let len = state.engine.log().len();
        if let Some(&bad) = positions.iter().find(|&&p| p == 0 || p > len) {
            return Err(PositionOutOfRange { position: bad, len }.into());
        }
        for &position in positions {
            state.engine.set_selected(position, selected)?;
        }
        self.rebuild(&state.engine);
        Ok(positions.len())
    }

    /// Select every entry without moving the viewport
    pub async fn select_all_visible(&self) -> usize {
        let mut state = self.state.lock().await;
        let top_line = self.display.top_line();
        state.engine.select_all();
        self.rebuild(&state.engine);
        self.display.set_top_line(top_line);
        state.engine.log().len()
    }

    /// Merge the selected entries onto the clipboard.
    ///
    /// Visited entries are deselected even if the clipboard write fails.
    /// An empty outcome is returned without touching the clipboard.
    pub async fn copy_selected(&self) -> Result<CopyOutcome, ServiceError> {
        let outcome = {
            let mut state = self.state.lock().await;
            let outcome = state.engine.copy_selected();
            self.rebuild(&state.engine);
            self.display.set_status(&outcome.status_message());
            outcome
        };

        if outcome.is_empty() {
            tracing::info!("nothing to copy");
            return Ok(outcome);
        }

        tracing::info!("{}", outcome.status_message());
        if let Err(e) = self.clipboard.write_all(&outcome.text).await {
            tracing::warn!(error = %e, "clipboard write failed");
            let _ = self
                .notifier
                .notify(NOTIFY_TITLE, &e.to_string(), NotificationIcon::Error)
                .await;
            return Err(e.into());
        }

        Ok(outcome)
    }

    /// Remove the selected entries
    pub async fn delete_selected(&self) -> DeleteOutcome {
        let mut state = self.state.lock().await;
        let outcome = state.engine.delete_selected();
        tracing::info!("{}", outcome.status_message());
        self.display.set_status(&outcome.status_message());
        self.rebuild(&state.engine);
        outcome
    }

    pub async fn apply_poll_interval(&self, raw: &str) -> Result<u64, ServiceError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let interval = state
            .controller
            .apply_poll_interval(state.engine.settings_mut(), raw)?;
        tracing::info!(interval_ms = interval, "capture interval updated");
        Ok(interval)
    }

    pub async fn apply_max_entries(&self, raw: &str) -> Result<usize, ServiceError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let max_entries = state
            .controller
            .apply_max_entries(state.engine.settings_mut(), raw)?;
        tracing::info!(max_entries, "history size updated");
        Ok(max_entries)
    }

    /// Change the theme preference. Returns true when a restart is needed
    /// for the change to be visible.
    pub async fn set_dark_mode(&self, dark_mode: bool) -> bool {
        let restart_needed = {
            let mut guard = self.state.lock().await;
            let state = &mut *guard;
            state
                .controller
                .set_dark_mode(state.engine.settings_mut(), dark_mode)
        };
        self.announce_theme_change(restart_needed).await;
        restart_needed
    }

    /// Flip the theme preference. Returns the new value and whether a
    /// restart is needed.
    pub async fn toggle_dark_mode(&self) -> (bool, bool) {
        let (dark_mode, restart_needed) = {
            let mut guard = self.state.lock().await;
            let state = &mut *guard;
            let settings = state.engine.settings_mut();
            let restart_needed = state.controller.toggle_dark_mode(settings);
            (settings.dark_mode, restart_needed)
        };
        self.announce_theme_change(restart_needed).await;
        (dark_mode, restart_needed)
    }

    async fn announce_theme_change(&self, restart_needed: bool) {
        if restart_needed {
            let _ = self
                .notifier
                .notify(
                    "App Restart Required",
                    "The theme change takes effect after the application is restarted.",
                    NotificationIcon::Info,
                )
                .await;
        }
    }

    pub async fn settings(&self) -> Settings {
        self.state.lock().await.engine.settings().clone()
    }

    /// Current capture interval, read fresh on every poll tick
    pub async fn capture_interval(&self) -> Duration {
        self.state.lock().await.engine.settings().capture_interval()
    }

    pub async fn history_len(&self) -> usize {
        self.state.lock().await.engine.log().len()
    }

    /// Consistent copy of the document to persist
    pub async fn snapshot(&self) -> AppConfig {
        self.state.lock().await.engine.to_config()
    }

    /// Persist history and settings
    pub async fn save<S>(&self, store: &S) -> Result<(), ServiceError>
    where
        S: ConfigStore + ?Sized,
    {
        let config = self.snapshot().await;
        match store.save(&config).await {
            Ok(()) => {
                tracing::info!(path = %store.path().display(), entries = config.log.len(), "saved config");
                let _ = self
                    .notifier
                    .notify(NOTIFY_TITLE, "Saved configuration successfully.", NotificationIcon::Success)
                    .await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save config");
                let _ = self
                    .notifier
                    .notify(NOTIFY_TITLE, &format!("Failed to save config: {}", e), NotificationIcon::Error)
                    .await;
                Err(e.into())
            }
        }
    }

    fn rebuild(&self, engine: &HistoryEngine) {
        self.display.rebuild_list(&engine.render_lines());
    }
}
