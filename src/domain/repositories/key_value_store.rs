use crate::domain::error::DomainResult;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

/// Durable string store addressed by fixed keys.
///
/// Either call may fail; callers that must not fail are expected to absorb
/// the error themselves.
#[cfg_attr(test, automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> DomainResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}

pub type DynKeyValueStore = Arc<dyn KeyValueStore>;
