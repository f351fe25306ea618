use crate::{
    domain::{entities::NotificationRecord, services::SharedNotificationCache},
    presentation::dtos::{NotificationError, NotificationFeedResponse, NotificationListResponse},
};

/// Facade for a notification bell style consumer. Every call returns the
/// list as it stands after the call.
#[derive(Clone)]
pub struct NotificationController {
    cache: SharedNotificationCache,
}

impl NotificationController {
    pub fn new(cache: SharedNotificationCache) -> Self {
        Self { cache }
    }

    pub fn get_notifications(&self) -> NotificationListResponse {
        NotificationListResponse::from(self.cache.lock().state())
    }

    pub fn unread_count(&self) -> usize {
        self.cache.lock().unread_count()
    }

    pub fn set_notifications(&self, records: Vec<NotificationRecord>) -> NotificationListResponse {
        let mut cache = self.cache.lock();
        cache.set_notifications(records);
        NotificationListResponse::from(cache.state())
    }

    /// Parses a listing body and replaces the cached list with it. A body
    /// that does not parse leaves the cache untouched.
    pub fn set_notifications_from_json(
        &self,
        body: &str,
    ) -> Result<NotificationListResponse, NotificationError> {
        let records = NotificationFeedResponse::parse(body).map_err(NotificationError::from)?;
        Ok(self.set_notifications(records))
    }

    pub fn add_notification(&self, record: NotificationRecord) -> NotificationListResponse {
        let mut cache = self.cache.lock();
        cache.add_notification(record);
        NotificationListResponse::from(cache.state())
    }

    pub fn mark_as_read(&self, id: &str) -> NotificationListResponse {
        let mut cache = self.cache.lock();
        cache.mark_as_read(id);
        NotificationListResponse::from(cache.state())
    }

    pub fn remove_notification(&self, id: &str) -> NotificationListResponse {
        let mut cache = self.cache.lock();
        cache.remove_notification(id);
        NotificationListResponse::from(cache.state())
    }

    pub fn mark_all_as_read(&self) -> NotificationListResponse {
        let mut cache = self.cache.lock();
        cache.mark_all_as_read();
        NotificationListResponse::from(cache.state())
    }

    pub fn clear_all(&self) -> NotificationListResponse {
        let mut cache = self.cache.lock();
        cache.clear_all();
        NotificationListResponse::from(cache.state())
    }
}
