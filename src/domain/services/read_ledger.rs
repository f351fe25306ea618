use crate::domain::{
    error::{DomainError, DomainResult},
    repositories::DynKeyValueStore,
};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Store key holding the JSON array of read notification ids.
pub const READ_NOTIFICATIONS_KEY: &str = "kirnagram:readNotifications";

/// Durable set of notification ids known to have been read.
///
/// This is the only place that talks to the durable store. Both directions
/// are fail-open: a failed or malformed read yields an empty set and a failed
/// write is logged and dropped, so callers never see a storage error.
pub struct ReadLedger {
    store: DynKeyValueStore,
    key: String,
}

impl ReadLedger {
    pub fn new(store: DynKeyValueStore) -> Self {
        Self::with_key(store, READ_NOTIFICATIONS_KEY)
    }

    pub fn with_key(store: DynKeyValueStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self) -> HashSet<String> {
        match self.try_load() {
            Ok(ids) => ids,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to load read ledger, treating as empty");
                HashSet::new()
            }
        }
    }

    /// Overwrites the stored ledger with `ids`.
    pub fn save(&self, ids: &HashSet<String>) {
        if let Err(e) = self.try_save(ids) {
            warn!(key = %self.key, error = %e, "Failed to persist read ledger");
        }
    }

    fn try_load(&self) -> DomainResult<HashSet<String>> {
        let raw = match self.store.get(&self.key)? {
            Some(raw) => raw,
            None => return Ok(HashSet::new()),
        };

        let entries = match serde_json::from_str::<Value>(&raw)? {
            Value::Array(entries) => entries,
            _ => {
                return Err(DomainError::SerializationError(
                    "read ledger is not a JSON array".to_string(),
                ))
            }
        };

        let total = entries.len();
        let ids: HashSet<String> = entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(id) => Some(id),
                _ => None,
            })
            .collect();

        let kept = ids.len();
        if kept < total {
            debug!(key = %self.key, total, kept, "Dropped non-string or duplicate ledger entries");
        }

        Ok(ids)
    }

    fn try_save(&self, ids: &HashSet<String>) -> DomainResult<()> {
        let mut sorted: Vec<&String> = ids.iter().collect();
        sorted.sort();
        let raw = serde_json::to_string(&sorted)?;
        self.store.set(&self.key, &raw)
    }
}
