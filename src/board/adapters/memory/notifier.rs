//! Notifier that records notifications in memory.

use std::sync::{Arc, Mutex};

use crate::board::ports::{Notification, Notifier, Severity};

/// Thread-safe notifier keeping every notification it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all notifications received so far, oldest first.
    #[must_use]
    pub fn received(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent notification, which is the one on display.
    #[must_use]
    pub fn latest(&self) -> Option<Notification> {
        self.received().pop()
    }

    /// Counts notifications of the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.received()
            .iter()
            .filter(|notification| notification.severity == severity)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut received) = self.received.lock() {
            received.push(notification);
        }
    }
}
