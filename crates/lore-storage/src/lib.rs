//! # lore-storage
//!
//! SQLite persistence for Lore: one serialized writer, a round-robin read
//! pool, versioned migrations, and an FTS5 index over title, content and
//! summary.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use lore_core::errors::{LoreError, StorageError};

/// Wrap a driver-level message as a storage error.
pub fn to_storage_err(message: String) -> LoreError {
    LoreError::StorageError(StorageError::SqliteError { message })
}
