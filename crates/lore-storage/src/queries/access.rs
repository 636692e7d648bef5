//! Access counters.

use rusqlite::{params, Connection};

use lore_core::errors::LoreResult;
use lore_core::memory::MemoryId;

use super::memory_crud::now_rfc3339;
use crate::to_storage_err;

/// In-place increment so concurrent recalls never lose an update.
/// Returns false when no row has this id.
pub fn increment_access(conn: &Connection, id: MemoryId) -> LoreResult<bool> {
    let changed = conn
        .execute(
            "UPDATE knowledge_base
             SET access_count = access_count + 1, last_accessed_at = ?1
             WHERE id = ?2",
            params![now_rfc3339(), id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}
