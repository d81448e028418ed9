//! In-memory notifier that records everything it is handed.

use std::sync::{Arc, RwLock};

use crate::board::ports::notifier::{BoardNotification, Notifier};

/// Thread-safe notifier keeping every notification in arrival order.
///
/// Clones share the same log, so a handle kept aside before wiring the
/// notifier into a service still observes later deliveries.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<RwLock<Vec<BoardNotification>>>,
}

impl RecordingNotifier {
    /// Creates a notifier with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the notifications delivered so far.
    #[must_use]
    pub fn sent(&self) -> Vec<BoardNotification> {
        self.sent
            .read()
            .map_or_else(|_| Vec::new(), |notifications| notifications.clone())
    }

    /// Returns the most recent notification, if any.
    #[must_use]
    pub fn last(&self) -> Option<BoardNotification> {
        self.sent
            .read()
            .ok()
            .and_then(|notifications| notifications.last().cloned())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &BoardNotification) {
        if let Ok(mut sent) = self.sent.write() {
            sent.push(notification.clone());
        }
    }
}
