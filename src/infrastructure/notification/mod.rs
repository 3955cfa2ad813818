//! Notification infrastructure module

mod noop;
mod notify_rust;

pub use noop::NoOpNotifier;
pub use notify_rust::NotifyRustNotifier;

use crate::application::ports::Notifier;

/// Create the notifier: desktop notifications when enabled, log-only otherwise
pub fn create_notifier(enabled: bool) -> Box<dyn Notifier> {
    if enabled {
        Box::new(NotifyRustNotifier::new())
    } else {
        Box::new(NoOpNotifier::new())
    }
}
