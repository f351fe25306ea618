pub mod json_file_store;
pub mod memory_store;
pub mod sqlite_store;

pub use json_file_store::JsonFileKeyValueStore;
pub use memory_store::InMemoryKeyValueStore;
pub use sqlite_store::SqliteKeyValueStore;

use crate::domain::{error::DomainResult, repositories::DynKeyValueStore};
use crate::infrastructure::config::StoreBackend;
use std::sync::Arc;
use tracing::info;

pub fn open_store(backend: &StoreBackend) -> DomainResult<DynKeyValueStore> {
    let store: DynKeyValueStore = match backend {
        StoreBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
        StoreBackend::JsonFile(path) => Arc::new(JsonFileKeyValueStore::new(path)),
        StoreBackend::Sqlite(path) => Arc::new(SqliteKeyValueStore::new(path)?),
    };
    info!(backend = ?backend, "Opened durable store");
    Ok(store)
}
