//! No-op notification adapter

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// Notifier used when desktop notifications are disabled.
///
/// Messages still reach the log.
pub struct NoOpNotifier;

impl NoOpNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NoOpNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        tracing::debug!(title, message, icon = icon.icon_name(), "notification suppressed");
        Ok(())
    }
}
