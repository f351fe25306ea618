use crate::domain::{entities::NotificationRecord, error::DomainResult};
use async_trait::async_trait;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

/// Upstream source of the canonical notification list, typically an
/// authenticated call to the backend listing endpoint.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationFeed: Send + Sync {
    async fn fetch_notifications(&self) -> DomainResult<Vec<NotificationRecord>>;
}

pub type DynNotificationFeed = Arc<dyn NotificationFeed>;
