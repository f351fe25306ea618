use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::KeyValueStore;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const TABLE_NAME: &str = "kv_store";

#[derive(Debug)]
pub struct SqliteKeyValueStore {
    connection: Mutex<Connection>,
}

impl SqliteKeyValueStore {
    /// Opens (or creates) the database at `path`; `":memory:"` is accepted.
    pub fn new<P: AsRef<Path>>(path: P) -> DomainResult<Self> {
        let connection = Connection::open(path)
            .map_err(|e| DomainError::StorageError(format!("Failed to open database: {}", e)))?;

        connection
            .execute(
                &format!(
                    "CREATE TABLE IF NOT EXISTS {} (
                        key TEXT PRIMARY KEY,
                        value TEXT NOT NULL
                    )",
                    TABLE_NAME
                ),
                [],
            )
            .map_err(|e| DomainError::StorageError(format!("Failed to create table: {}", e)))?;

        Ok(Self {
            connection: Mutex::new(connection),
        })
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let conn = self.connection.lock();
        let query = format!("SELECT value FROM {} WHERE key = ?1", TABLE_NAME);
        let value = conn
            .query_row(&query, params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let conn = self.connection.lock();
        let query = format!(
            "INSERT INTO {} (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            TABLE_NAME
        );
        conn.execute(&query, params![key, value])?;
        Ok(())
    }
}
