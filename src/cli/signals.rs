//! Signal handling for the daemon

use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;

/// Daemon signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaemonSignal {
    /// Save and exit (SIGINT, SIGTERM or a `quit` request)
    Shutdown,
}

/// Daemon signal handler
///
/// Handles OS shutdown signals (SIGINT/SIGTERM) and provides a channel
/// for the socket server to request a shutdown too.
pub struct DaemonSignalHandler {
    receiver: mpsc::Receiver<DaemonSignal>,
}

impl DaemonSignalHandler {
    /// Create a new daemon signal handler and start listening for shutdown signals.
    ///
    /// Returns the handler and a sender that other sources can use to
    /// reach the daemon loop.
    pub async fn new() -> Result<(Self, mpsc::Sender<DaemonSignal>), std::io::Error> {
        let (tx, rx) = mpsc::channel(10);

        for (kind, name) in [
            (SignalKind::interrupt(), "SIGINT"),
            (SignalKind::terminate(), "SIGTERM"),
        ] {
            let tx = tx.clone();
            let mut stream = signal(kind)?;
            tokio::spawn(async move {
                stream.recv().await;
                tracing::info!(signal = name, "received shutdown signal");
                let _ = tx.send(DaemonSignal::Shutdown).await;
            });
        }

        Ok((Self { receiver: rx }, tx))
    }

    /// Wait for the next signal
    pub async fn recv(&mut self) -> Option<DaemonSignal> {
        self.receiver.recv().await
    }
}
