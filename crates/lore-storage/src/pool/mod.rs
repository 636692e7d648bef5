//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use lore_core::config::StorageConfig;
use lore_core::errors::LoreResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// The single write connection plus the read connection pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: ReadPool,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open a pool for the given database file. The writer is opened first
    /// so the file exists before read-only connections attach.
    pub fn open(path: &Path, config: &StorageConfig) -> LoreResult<Self> {
        let writer = WriteConnection::open(path, config)?;
        let readers = ReadPool::open(path, config)?;
        Ok(Self {
            writer,
            readers,
            db_path: Some(path.to_path_buf()),
        })
    }

    /// In-memory writer only. Each in-memory connection is its own
    /// database, so the engine routes reads through the writer.
    pub fn open_in_memory(config: &StorageConfig) -> LoreResult<Self> {
        let writer = WriteConnection::open_in_memory(config)?;
        let readers = ReadPool::empty();
        Ok(Self {
            writer,
            readers,
            db_path: None,
        })
    }
}
