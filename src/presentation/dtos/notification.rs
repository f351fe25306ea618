use crate::domain::{
    entities::{NotificationCacheState, NotificationRecord},
    error::{DomainError, DomainResult},
};
use serde::{Deserialize, Serialize};

/// Body of the backend listing endpoint. Both a bare array and an object
/// wrapping the array are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NotificationFeedResponse {
    List(Vec<NotificationRecord>),
    Wrapped { notifications: Vec<NotificationRecord> },
}

impl NotificationFeedResponse {
    pub fn parse(body: &str) -> DomainResult<Vec<NotificationRecord>> {
        let response: Self = serde_json::from_str(body)?;
        Ok(response.into_records())
    }

    pub fn into_records(self) -> Vec<NotificationRecord> {
        match self {
            Self::List(records) => records,
            Self::Wrapped { notifications } => notifications,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationRecord>,
    pub unread_count: usize,
    pub total: usize,
}

impl From<&NotificationCacheState> for NotificationListResponse {
    fn from(state: &NotificationCacheState) -> Self {
        Self {
            notifications: state.notifications().to_vec(),
            unread_count: state.unread_count(),
            total: state.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationError {
    pub code: String,
    pub message: String,
    pub details: Vec<String>,
}

impl From<DomainError> for NotificationError {
    fn from(error: DomainError) -> Self {
        let code = match &error {
            DomainError::SerializationError(_) => "INVALID_PAYLOAD",
            DomainError::StorageError(_) => "STORAGE_ERROR",
            DomainError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            DomainError::FeedError(_) => "FEED_ERROR",
            DomainError::InternalError(_) => "INTERNAL_ERROR",
        };
        Self {
            code: code.to_string(),
            message: error.to_string(),
            details: vec![],
        }
    }
}
