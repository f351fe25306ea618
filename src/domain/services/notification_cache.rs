use crate::domain::{
    entities::{NotificationCacheState, NotificationRecord},
    events::{DynEventPublisher, NoopEventPublisher, NotificationCacheEvent},
    services::read_ledger::ReadLedger,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// In-memory notification list for the current session, overlaid with the
/// durable read ledger.
///
/// Every operation updates the in-memory state first and then writes
/// through to the ledger. None of them can fail: storage problems are
/// absorbed by [`ReadLedger`].
pub struct NotificationCache {
    ledger: ReadLedger,
    state: NotificationCacheState,
    publisher: DynEventPublisher,
}

pub type SharedNotificationCache = Arc<Mutex<NotificationCache>>;

impl NotificationCache {
    pub fn new(ledger: ReadLedger) -> Self {
        Self::with_publisher(ledger, Arc::new(NoopEventPublisher))
    }

    pub fn with_publisher(ledger: ReadLedger, publisher: DynEventPublisher) -> Self {
        Self {
            ledger,
            state: NotificationCacheState::new(),
            publisher,
        }
    }

    pub fn into_shared(self) -> SharedNotificationCache {
        Arc::new(Mutex::new(self))
    }

    pub fn state(&self) -> &NotificationCacheState {
        &self.state
    }

    pub fn notifications(&self) -> &[NotificationRecord] {
        self.state.notifications()
    }

    pub fn unread_count(&self) -> usize {
        self.state.unread_count()
    }

    pub fn get(&self, id: &str) -> Option<&NotificationRecord> {
        self.state.get(id)
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn read_ledger(&self) -> &ReadLedger {
        &self.ledger
    }

    /// Replaces the list. A record ends up read if the server says so or the
    /// ledger remembers it as read; the ledger itself is not modified.
    pub fn set_notifications(&mut self, records: Vec<NotificationRecord>) {
        let read_ids = self.ledger.load();
        let merged = records
            .into_iter()
            .map(|mut record| {
                if read_ids.contains(&record.id) {
                    record.mark_as_read();
                }
                record
            })
            .collect();

        self.state.replace(merged);
        debug!(
            total = self.state.len(),
            unread = self.state.unread_count(),
            "Notifications replaced"
        );
        self.publisher
            .publish_event(NotificationCacheEvent::notifications_replaced(
                self.state.len(),
                self.state.unread_count(),
            ));
    }

    /// Prepends a freshly arrived notification. It is always stored unread.
    pub fn add_notification(&mut self, mut record: NotificationRecord) {
        record.read = false;
        let id = record.id.clone();

        self.state.prepend(record);
        debug!(id = %id, unread = self.state.unread_count(), "Notification added");
        self.publisher
            .publish_event(NotificationCacheEvent::notification_added(
                &id,
                self.state.unread_count(),
            ));
    }

    /// Marks `id` read. The ledger records it even when no record matches so
    /// that a later `set_notifications` picks it up.
    pub fn mark_as_read(&mut self, id: &str) {
        let found = self.state.mark_read(id);

        let mut read_ids = self.ledger.load();
        read_ids.insert(id.to_string());
        self.ledger.save(&read_ids);

        debug!(id, found, unread = self.state.unread_count(), "Notification marked read");
        self.publisher
            .publish_event(NotificationCacheEvent::notification_read(
                id,
                self.state.unread_count(),
            ));
    }

    /// Drops the record and forgets its read status.
    pub fn remove_notification(&mut self, id: &str) {
        let found = self.state.remove(id);

        let mut read_ids = self.ledger.load();
        read_ids.remove(id);
        self.ledger.save(&read_ids);

        debug!(id, found, unread = self.state.unread_count(), "Notification removed");
        self.publisher
            .publish_event(NotificationCacheEvent::notification_removed(
                id,
                self.state.unread_count(),
            ));
    }

    /// Marks every current record read and adds their ids to the ledger.
    /// Ids already in the ledger are kept.
    pub fn mark_all_as_read(&mut self) {
        self.state.mark_all_read();

        let mut read_ids = self.ledger.load();
        read_ids.extend(self.state.ids().map(str::to_string));
        self.ledger.save(&read_ids);

        debug!(total = self.state.len(), "All notifications marked read");
        self.publisher
            .publish_event(NotificationCacheEvent::all_notifications_read(
                self.state.len(),
            ));
    }

    /// Empties the list and resets the ledger.
    pub fn clear_all(&mut self) {
        self.state.clear();
        self.ledger.save(&Default::default());

        debug!("Notifications cleared");
        self.publisher
            .publish_event(NotificationCacheEvent::notifications_cleared());
    }
}
