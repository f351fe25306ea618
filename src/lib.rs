pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use domain::{
    error::DomainResult,
    events::DynEventPublisher,
    services::{NotificationCache, ReadLedger, SharedNotificationCache},
};
use infrastructure::{config::NotificationCacheConfig, stores::open_store};
use tracing::info;

/// Opens the configured durable store and returns an empty cache whose
/// ledger lives under `config.ledger_key`.
pub fn build_notification_cache(
    config: &NotificationCacheConfig,
    publisher: DynEventPublisher,
) -> DomainResult<SharedNotificationCache> {
    let store = open_store(&config.store)?;
    let ledger = ReadLedger::with_key(store, config.ledger_key.clone());
    info!(key = %config.ledger_key, "Notification cache ready");
    Ok(NotificationCache::with_publisher(ledger, publisher).into_shared())
}
