pub mod config;
pub mod env;
pub mod events;
pub mod logging;
pub mod stores;

pub use config::{NotificationCacheConfig, StoreBackend};
pub use events::BroadcastEventPublisher;
pub use stores::{open_store, InMemoryKeyValueStore, JsonFileKeyValueStore, SqliteKeyValueStore};
