//! Notification capability.
//!
//! Every user-facing message (rejections, round results, wallet events)
//! leaves the core through [`Notifier`]. Delivery is fire-and-forget.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    /// Something the user must fix before continuing.
    Error,
    /// A completed action.
    Success,
    /// Neutral status, such as a round result.
    Info,
}

/// A titled message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Notification {
    kind: NotificationKind,
    title: String,
    message: String,
}

impl Notification {
    /// Creates a notification of the given kind.
    #[instrument(skip(title, message))]
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, message)
    }

    /// Creates a success notification.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, message)
    }

    /// Creates an informational notification.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, message)
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.title, self.message)
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    /// Delivers a notification. No acknowledgment, no delivery guarantee.
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Front ends receive notifications over an unbounded channel.
impl Notifier for mpsc::UnboundedSender<Notification> {
    fn notify(&self, notification: Notification) {
        if self.send(notification).is_err() {
            debug!("Notification receiver dropped");
        }
    }
}

/// Notifier that only writes to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => error!(
                title = %notification.title,
                body = %notification.message,
                "Notification"
            ),
            NotificationKind::Success | NotificationKind::Info => info!(
                kind = %notification.kind,
                title = %notification.title,
                body = %notification.message,
                "Notification"
            ),
        }
    }
}
