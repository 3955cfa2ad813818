//! Clipboard poll loop
//!
//! State machine:
//!   SAMPLING -> IDLE (after one clipboard read, successful or not)
//!   IDLE -> SAMPLING (after the capture interval elapses)

use std::fmt;
use std::sync::Arc;

use super::ports::{ClipboardIo, Display, Notifier};
use super::service::HistoryService;

/// Poll loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollState {
    Idle,
    #[default]
    Sampling,
}

impl PollState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sampling => "sampling",
        }
    }
}

impl fmt::Display for PollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Periodically feeds the clipboard contents into the history
pub struct PollLoop<C, D, N>
where
    C: ClipboardIo,
    D: Display,
    N: Notifier,
{
    service: Arc<HistoryService<C, D, N>>,
    state: PollState,
}

impl<C, D, N> PollLoop<C, D, N>
where
    C: ClipboardIo,
    D: Display,
    N: Notifier,
{
    /// Create a loop that samples immediately on its first step
    pub fn new(service: Arc<HistoryService<C, D, N>>) -> Self {
        Self {
            service,
            state: PollState::Sampling,
        }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// Perform one transition and return the new state.
    ///
    /// Read failures are logged and otherwise ignored; the next sample
    /// happens after the usual interval.
    pub async fn step(&mut self) -> PollState {
        self.state = match self.state {
            PollState::Sampling => {
                if let Err(e) = self.service.sample().await {
                    tracing::debug!(error = %e, "clipboard read failed");
                }
                PollState::Idle
            }
            PollState::Idle => {
                // re-read so a settings change applies on the next tick
                let interval = self.service.capture_interval().await;
                tokio::time::sleep(interval).await;
                PollState::Sampling
            }
        };
        self.state
    }

    /// Run until the task is dropped
    pub async fn run(mut self) {
        loop {
            self.step().await;
        }
    }
}
