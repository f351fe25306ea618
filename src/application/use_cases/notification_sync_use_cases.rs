use crate::domain::{
    error::{DomainError, DomainResult},
    repositories::DynNotificationFeed,
    services::SharedNotificationCache,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Pulls the canonical list from the upstream feed and hands it to the cache.
pub struct NotificationSyncUseCases {
    feed: DynNotificationFeed,
    cache: SharedNotificationCache,
}

impl NotificationSyncUseCases {
    pub fn new(feed: DynNotificationFeed, cache: SharedNotificationCache) -> Self {
        Self { feed, cache }
    }

    pub fn cache(&self) -> &SharedNotificationCache {
        &self.cache
    }

    /// Fetches once and replaces the cached list. Returns the new unread
    /// count. A failed fetch leaves the cache as it was.
    pub async fn refresh(&self) -> DomainResult<usize> {
        let records = self.feed.fetch_notifications().await?;
        let mut cache = self.cache.lock();
        cache.set_notifications(records);
        Ok(cache.unread_count())
    }

    /// Refreshes immediately and then every `interval` until `cancel` fires.
    /// Failed refreshes are logged and retried on the next tick. A zero
    /// `interval` is rejected before anything is spawned.
    pub fn spawn_polling(
        self: Arc<Self>,
        interval: Duration,
        cancel: CancellationToken,
    ) -> DomainResult<JoinHandle<()>> {
        if interval.is_zero() {
            return Err(DomainError::ConfigurationError(
                "poll interval must be greater than zero".to_string(),
            ));
        }

        Ok(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(interval_ms = interval.as_millis() as u64, "Notification polling started");

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        match self.refresh().await {
                            Ok(unread) => debug!(unread, "Notifications refreshed"),
                            Err(e) => warn!(error = %e, "Notification refresh failed"),
                        }
                    }
                }
            }

            info!("Notification polling stopped");
        }))
    }
}
