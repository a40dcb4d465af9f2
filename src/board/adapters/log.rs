//! Notifier that forwards notifications to the `tracing` log.

use crate::board::ports::{Notification, Notifier, Severity};

/// Notifier for headless sessions, logging each notification at a level
/// matching its severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let Notification { message, severity } = notification;
        match severity {
            Severity::Error => tracing::error!(%severity, "{message}"),
            Severity::Warning => tracing::warn!(%severity, "{message}"),
            Severity::Success | Severity::Info => tracing::info!(%severity, "{message}"),
        }
    }
}
