use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum NotificationCacheEvent {
    NotificationsReplaced {
        total: usize,
        unread_count: usize,
        at: DateTime<Utc>,
    },
    NotificationAdded {
        notification_id: String,
        unread_count: usize,
        at: DateTime<Utc>,
    },
    NotificationRead {
        notification_id: String,
        unread_count: usize,
        at: DateTime<Utc>,
    },
    NotificationRemoved {
        notification_id: String,
        unread_count: usize,
        at: DateTime<Utc>,
    },
    AllNotificationsRead {
        total: usize,
        at: DateTime<Utc>,
    },
    NotificationsCleared {
        at: DateTime<Utc>,
    },
}

impl NotificationCacheEvent {
    pub fn notifications_replaced(total: usize, unread_count: usize) -> Self {
        Self::NotificationsReplaced {
            total,
            unread_count,
            at: Utc::now(),
        }
    }

    pub fn notification_added(notification_id: &str, unread_count: usize) -> Self {
        Self::NotificationAdded {
            notification_id: notification_id.to_string(),
            unread_count,
            at: Utc::now(),
        }
    }

    pub fn notification_read(notification_id: &str, unread_count: usize) -> Self {
        Self::NotificationRead {
            notification_id: notification_id.to_string(),
            unread_count,
            at: Utc::now(),
        }
    }

    pub fn notification_removed(notification_id: &str, unread_count: usize) -> Self {
        Self::NotificationRemoved {
            notification_id: notification_id.to_string(),
            unread_count,
            at: Utc::now(),
        }
    }

    pub fn all_notifications_read(total: usize) -> Self {
        Self::AllNotificationsRead {
            total,
            at: Utc::now(),
        }
    }

    pub fn notifications_cleared() -> Self {
        Self::NotificationsCleared { at: Utc::now() }
    }

    /// Unread count after the change that produced this event.
    pub fn unread_count(&self) -> usize {
        match self {
            Self::NotificationsReplaced { unread_count, .. }
            | Self::NotificationAdded { unread_count, .. }
            | Self::NotificationRead { unread_count, .. }
            | Self::NotificationRemoved { unread_count, .. } => *unread_count,
            Self::AllNotificationsRead { .. } | Self::NotificationsCleared { .. } => 0,
        }
    }
}
