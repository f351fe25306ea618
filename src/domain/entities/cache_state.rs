use super::NotificationRecord;
use serde::{Deserialize, Serialize};

/// The session's notification list plus its derived unread count.
///
/// `unread_count` is only ever written by [`NotificationCacheState::recompute_unread_count`],
/// so it always equals the number of records whose `read` flag is false.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "RawCacheState")]
pub struct NotificationCacheState {
    notifications: Vec<NotificationRecord>,
    unread_count: usize,
}

/// Wire shape of [`NotificationCacheState`]. Any incoming `unread_count` is
/// ignored and recomputed from the records.
#[derive(Deserialize)]
struct RawCacheState {
    #[serde(default)]
    notifications: Vec<NotificationRecord>,
}

impl From<RawCacheState> for NotificationCacheState {
    fn from(raw: RawCacheState) -> Self {
        let mut state = Self::new();
        state.replace(raw.notifications);
        state
    }
}

impl NotificationCacheState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[NotificationRecord] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&NotificationRecord> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.notifications.iter().map(|n| n.id.as_str())
    }

    pub(crate) fn replace(&mut self, notifications: Vec<NotificationRecord>) {
        self.notifications = notifications;
        self.recompute_unread_count();
    }

    pub(crate) fn prepend(&mut self, notification: NotificationRecord) {
        self.notifications.insert(0, notification);
        self.recompute_unread_count();
    }

    /// Returns true when a matching record was found.
    pub(crate) fn mark_read(&mut self, id: &str) -> bool {
        let found = match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.mark_as_read();
                true
            }
            None => false,
        };
        self.recompute_unread_count();
        found
    }

    pub(crate) fn mark_all_read(&mut self) {
        self.notifications.iter_mut().for_each(|n| n.mark_as_read());
        self.recompute_unread_count();
    }

    /// Returns true when at least one record was removed.
    pub(crate) fn remove(&mut self, id: &str) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.recompute_unread_count();
        self.notifications.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.notifications.clear();
        self.recompute_unread_count();
    }

    fn recompute_unread_count(&mut self) {
        self.unread_count = self.notifications.iter().filter(|n| n.is_unread()).count();
    }
}
