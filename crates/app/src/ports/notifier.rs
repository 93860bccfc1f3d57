//! Notifier port — the user-facing feedback channel.

use std::future::Future;

use wordclock_domain::outcome::Outcome;

/// Severity of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

impl Notification {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            text: text.into(),
        }
    }
}

impl From<&Outcome> for Notification {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Ok { msg } => Self::info(msg.clone()),
            Outcome::Err { reason } => Self::error(reason.clone()),
        }
    }
}

/// Shows notifications to the user.
///
/// Implementations must not block waiting for the user to acknowledge.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification) -> impl Future<Output = ()> + Send;
}
