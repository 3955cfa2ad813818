//! Daemon app runner

use std::process::ExitCode;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::application::ports::{ClipboardIo, ConfigStore, Notifier};
use crate::application::{HistoryEngine, HistoryService, PollLoop, ServiceError};
use crate::infrastructure::{create_clipboard, create_notifier, SnapshotDisplay, XdgConfigStore};

use super::app::{load_config, EXIT_ERROR, EXIT_SUCCESS};
use super::args::{DaemonOptions, Orientation};
use super::ipc::{create_ipc_server, RequestHandler};
use super::pid_file::PidFile;
use super::presenter::Presenter;
use super::protocol::{Request, Response};
use super::signals::{DaemonSignal, DaemonSignalHandler};

/// Serves control requests against the live history
pub struct ControlHandler<C, N, S>
where
    C: ClipboardIo,
    N: Notifier,
    S: ConfigStore,
{
    service: Arc<HistoryService<C, SnapshotDisplay, N>>,
    store: Arc<S>,
    orientation: Orientation,
    shutdown: mpsc::Sender<DaemonSignal>,
}

impl<C, N, S> ControlHandler<C, N, S>
where
    C: ClipboardIo,
    N: Notifier,
    S: ConfigStore,
{
    pub fn new(
        service: Arc<HistoryService<C, SnapshotDisplay, N>>,
        store: Arc<S>,
        orientation: Orientation,
        shutdown: mpsc::Sender<DaemonSignal>,
    ) -> Self {
        Self {
            service,
            store,
            orientation,
            shutdown,
        }
    }

    async fn dispatch(&self, request: Request) -> Result<Response, ServiceError> {
        let service = &self.service;
        let response = match request {
            Request::List => {
                let display = service.display();
                Response::Lines {
                    lines: display.lines(),
                    status: display.status(),
                }
            }
            Request::Show { position } => Response::Entry {
                position,
                value: service.entry(position).await?,
            },
            Request::Select { positions } => {
                let count = service.select(&positions, true).await?;
                Response::ok(format!("{} selected", plural(count)))
            }
            Request::Deselect { positions } => {
                let count = service.select(&positions, false).await?;
                Response::ok(format!("{} deselected", plural(count)))
            }
            Request::SelectAll => {
                let count = service.select_all_visible().await;
                Response::ok(format!("{} selected", plural(count)))
            }
            Request::Copy => {
                let outcome = service.copy_selected().await?;
                if outcome.is_empty() {
                    Response::ok(outcome.status_message())
                } else {
                    Response::Copied {
                        items: outcome.items_copied,
                        bytes: outcome.text.len(),
                        message: outcome.status_message(),
                    }
                }
            }
            Request::Delete => {
                let outcome = service.delete_selected().await;
                Response::Deleted {
                    count: outcome.deleted,
                    message: outcome.status_message(),
                }
            }
            Request::SetInterval { value } => {
                let interval = service.apply_poll_interval(&value).await?;
                Response::ok(format!("captureIntervalMs = {}", interval))
            }
            Request::SetEntries { value } => {
                let max_entries = service.apply_max_entries(&value).await?;
                Response::ok(format!("maxEntries = {}", max_entries))
            }
            Request::SetDarkMode { enabled } => {
                let restart_needed = service.set_dark_mode(enabled).await;
                Response::ok(dark_mode_message(enabled, restart_needed))
            }
            Request::ToggleDarkMode => {
                let (enabled, restart_needed) = service.toggle_dark_mode().await;
                Response::ok(dark_mode_message(enabled, restart_needed))
            }
            Request::Save => {
                service.save(self.store.as_ref()).await?;
                Response::ok(format!("Saved to {}", self.store.path().display()))
            }
            Request::Status => {
                let settings = service.settings().await;
                Response::Status {
                    entries: service.history_len().await,
                    capture_interval_ms: settings.capture_interval_ms,
                    max_entries: settings.max_entries,
                    dark_mode: settings.dark_mode,
                    orientation: self.orientation.as_str().to_string(),
                    config_path: self.store.path().display().to_string(),
                }
            }
            Request::Quit => {
                let _ = self.shutdown.send(DaemonSignal::Shutdown).await;
                Response::ok("Shutting down")
            }
        };
        Ok(response)
    }
}

#[async_trait]
impl<C, N, S> RequestHandler for ControlHandler<C, N, S>
where
    C: ClipboardIo,
    N: Notifier,
    S: ConfigStore,
{
    async fn handle(&self, request: Request) -> Response {
        self.dispatch(request).await.unwrap_or_else(Response::error)
    }
}

fn dark_mode_message(enabled: bool, restart_needed: bool) -> String {
    if restart_needed {
        format!("darkMode = {} (restart required)", enabled)
    } else {
        format!("darkMode = {}", enabled)
    }
}

fn plural(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{} entries", count)
    }
}

/// Run daemon mode
pub async fn run_daemon(options: DaemonOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Acquire PID file
    let pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    let store = Arc::new(XdgConfigStore::resolve(options.config_path.clone()));
    let config = load_config(
        store.as_ref(),
        options.capture_interval_ms,
        options.max_entries,
    )
    .await;
    let engine = HistoryEngine::from_config(config);

    let service = Arc::new(HistoryService::new(
        engine,
        create_clipboard(options.backend),
        SnapshotDisplay::new(),
        create_notifier(options.notify),
    ));
    service.refresh().await;

    // Setup signal handler (returns handler + sender for socket server)
    let (mut signals, signal_tx) = match DaemonSignalHandler::new().await {
        Ok(s) => s,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let mut server = create_ipc_server();
    if let Err(e) = server.bind() {
        presenter.error(&format!("Failed to bind socket: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }
    let socket = server.path();

    let handler = Arc::new(ControlHandler::new(
        Arc::clone(&service),
        Arc::clone(&store),
        options.orientation,
        signal_tx,
    ));
    let server_task = tokio::spawn(async move {
        if let Err(e) = server.run(handler).await {
            tracing::error!(error = %e, "socket server stopped");
        }
    });
    let poll_task = tokio::spawn(PollLoop::new(Arc::clone(&service)).run());

    let settings = service.settings().await;
    tracing::info!(
        backend = %options.backend,
        orientation = options.orientation.as_str(),
        interval_ms = settings.capture_interval_ms,
        max_entries = settings.max_entries,
        "daemon started"
    );
    presenter.daemon_status("Watching clipboard...");
    presenter.info(&format!(
        "PID: {} | Socket: {} | Config: {}",
        std::process::id(),
        socket,
        store.path().display()
    ));

    let clean = matches!(signals.recv().await, Some(DaemonSignal::Shutdown));
    presenter.daemon_status("Shutting down...");

    // Stop sampling before the final save so the document is settled
    poll_task.abort();
    server_task.abort();
    let _ = poll_task.await;
    let _ = server_task.await;

    let saved = service.save(store.as_ref()).await;
    if let Err(e) = &saved {
        presenter.error(&format!("Failed to save {}: {}", store.path().display(), e));
    }

    let _ = pid_file.release();

    if clean && saved.is_ok() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}
