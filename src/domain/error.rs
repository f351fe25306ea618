use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Feed error: {0}")]
    FeedError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<rusqlite::Error> for DomainError {
    fn from(error: rusqlite::Error) -> Self {
        DomainError::StorageError(format!("Database error: {}", error))
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(error: serde_json::Error) -> Self {
        DomainError::SerializationError(format!("JSON error: {}", error))
    }
}

impl From<std::io::Error> for DomainError {
    fn from(error: std::io::Error) -> Self {
        DomainError::StorageError(format!("IO error: {}", error))
    }
}

impl From<String> for DomainError {
    fn from(error: String) -> Self {
        DomainError::InternalError(error)
    }
}

impl From<&str> for DomainError {
    fn from(error: &str) -> Self {
        DomainError::InternalError(error.to_string())
    }
}
