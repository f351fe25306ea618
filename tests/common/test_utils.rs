use kirnagram_lib::domain::{
    entities::NotificationRecord,
    error::{DomainError, DomainResult},
    repositories::KeyValueStore,
    services::{NotificationCache, ReadLedger},
};
use kirnagram_lib::infrastructure::stores::InMemoryKeyValueStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn create_test_record(id: &str, read: bool) -> NotificationRecord {
    NotificationRecord::new(
        id,
        format!("user-{}", id),
        format!("User {}", id),
        "follow",
        "started following you",
        "2024-05-01T10:00:00Z",
    )
    .with_user_image(format!("https://cdn.example.com/{}.png", id))
    .with_read(read)
}

pub fn create_test_records(specs: &[(&str, bool)]) -> Vec<NotificationRecord> {
    specs
        .iter()
        .map(|(id, read)| create_test_record(id, *read))
        .collect()
}

pub fn cache_over(store: Arc<dyn KeyValueStore>) -> NotificationCache {
    NotificationCache::new(ReadLedger::new(store))
}

pub fn assert_unread_invariant(cache: &NotificationCache) {
    let expected = cache.notifications().iter().filter(|n| !n.read).count();
    assert_eq!(
        cache.unread_count(),
        expected,
        "unread count drifted from the record list"
    );
}

/// In-memory store whose reads and writes can be switched to fail.
#[derive(Default)]
pub struct FlakyKeyValueStore {
    inner: InMemoryKeyValueStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FlakyKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.snapshot().get(key).cloned()
    }
}

impl KeyValueStore for FlakyKeyValueStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::StorageError("read refused".to_string()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::StorageError("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }
}
