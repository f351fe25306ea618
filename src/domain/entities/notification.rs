use serde::{Deserialize, Serialize};

/// A notification as served by the backend listing endpoint.
///
/// Everything except `read` is display payload and passes through the cache
/// untouched. `id` is stable across fetches of the same underlying event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationRecord {
    pub id: String,
    #[serde(alias = "userId")]
    pub user_id: String,
    #[serde(alias = "userName")]
    pub user_name: String,
    #[serde(alias = "userImage", default)]
    pub user_image: Option<String>,
    pub action: String,
    pub description: String,
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
}

impl NotificationRecord {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        action: impl Into<String>,
        description: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            user_image: None,
            action: action.into(),
            description: description.into(),
            timestamp: timestamp.into(),
            read: false,
        }
    }

    pub fn with_user_image(mut self, user_image: impl Into<String>) -> Self {
        self.user_image = Some(user_image.into());
        self
    }

    pub fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub fn mark_as_read(&mut self) {
        self.read = true;
    }

    pub fn is_unread(&self) -> bool {
        !self.read
    }
}
