//! Notification domain - user-facing messages raised by actions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Pending notifications, oldest first
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    pending: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.pending.push(Notification {
            message: message.into(),
            created_at: Utc::now(),
        });
    }

    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    /// Take all pending notifications
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }
}
