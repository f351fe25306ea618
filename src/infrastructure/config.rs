use crate::domain::error::{DomainError, DomainResult};
use crate::domain::services::READ_NOTIFICATIONS_KEY;
use crate::infrastructure::env::get_env;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const LEDGER_KEY_VAR: &str = "KIRNAGRAM_LEDGER_KEY";
pub const STORE_VAR: &str = "KIRNAGRAM_STORE";
pub const DATA_DIR_VAR: &str = "KIRNAGRAM_DATA_DIR";
pub const POLL_INTERVAL_VAR: &str = "KIRNAGRAM_POLL_INTERVAL_SECS";

const JSON_STORE_FILE: &str = "kv_store.json";
const SQLITE_STORE_FILE: &str = "kv_store.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    JsonFile(PathBuf),
    Sqlite(PathBuf),
}

impl StoreBackend {
    fn parse(name: &str, data_dir: &Path) -> DomainResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::JsonFile(data_dir.join(JSON_STORE_FILE))),
            "sqlite" => Ok(Self::Sqlite(data_dir.join(SQLITE_STORE_FILE))),
            other => Err(DomainError::ConfigurationError(format!(
                "Unknown store backend '{}', expected memory, file or sqlite",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCacheConfig {
    pub ledger_key: String,
    pub store: StoreBackend,
    pub poll_interval: Duration,
}

impl Default for NotificationCacheConfig {
    fn default() -> Self {
        Self {
            ledger_key: READ_NOTIFICATIONS_KEY.to_string(),
            store: StoreBackend::JsonFile(default_data_dir().join(JSON_STORE_FILE)),
            poll_interval: Duration::from_secs(60),
        }
    }
}

impl NotificationCacheConfig {
    /// Loads `.env` if present, then reads the `KIRNAGRAM_*` variables.
    pub fn from_env() -> DomainResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(get_env)
    }

    /// Builds a config from an arbitrary variable source. Unset variables
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(key) = lookup(LEDGER_KEY_VAR) {
            if key.trim().is_empty() {
                return Err(DomainError::ConfigurationError(format!(
                    "{} must not be empty",
                    LEDGER_KEY_VAR
                )));
            }
            config.ledger_key = key;
        }

        let data_dir = lookup(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        config.store = match lookup(STORE_VAR) {
            Some(name) => StoreBackend::parse(&name, &data_dir)?,
            None => StoreBackend::JsonFile(data_dir.join(JSON_STORE_FILE)),
        };

        if let Some(raw) = lookup(POLL_INTERVAL_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                DomainError::ConfigurationError(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    POLL_INTERVAL_VAR, raw
                ))
            })?;
            if secs == 0 {
                return Err(DomainError::ConfigurationError(format!(
                    "{} must be greater than zero",
                    POLL_INTERVAL_VAR
                )));
            }
            config.poll_interval = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_ledger_key(mut self, ledger_key: impl Into<String>) -> Self {
        self.ledger_key = ledger_key.into();
        self
    }

    pub fn with_store(mut self, store: StoreBackend) -> Self {
        self.store = store;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "kirnagram", "app")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".kirnagram"))
}
