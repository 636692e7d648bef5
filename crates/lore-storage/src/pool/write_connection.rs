//! Single write connection behind a `std::sync::Mutex`.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use lore_core::config::StorageConfig;
use lore_core::errors::{LoreError, LoreResult};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// A single write connection. Writers are serialized by the mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, config: &StorageConfig) -> LoreResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory(config: &StorageConfig) -> LoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> LoreResult<T>
    where
        F: FnOnce(&Connection) -> LoreResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| LoreError::ConcurrencyError(format!("write lock poisoned: {e}")))?;
        f(&guard)
    }
}
