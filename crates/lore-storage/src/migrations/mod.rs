//! Versioned schema migrations tracked in the `schema_version` table.

pub mod v001_knowledge_table;
pub mod v002_fts5_index;

use rusqlite::{params, Connection};
use tracing::info;

use lore_core::errors::{LoreError, LoreResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> LoreResult<()>;

const MIGRATIONS: &[(u32, &str, MigrationFn)] = &[
    (1, "knowledge_table", v001_knowledge_table::migrate),
    (2, "fts5_index", v002_fts5_index::migrate),
];

/// Highest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Apply every pending migration, each in its own transaction.
/// Returns the schema version after the run.
pub fn run_migrations(conn: &Connection) -> LoreResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    if current > LATEST_VERSION {
        return Err(StorageError::CorruptionDetected {
            details: format!(
                "schema version {current} is newer than supported version {LATEST_VERSION}"
            ),
        }
        .into());
    }

    for &(version, name, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        let failed = |reason: String| -> LoreError {
            StorageError::MigrationFailed { version, reason }.into()
        };

        let tx = conn
            .unchecked_transaction()
            .map_err(|e| failed(e.to_string()))?;
        match migrate(&tx).and_then(|()| {
            tx.execute(
                "INSERT INTO schema_version (version, name) VALUES (?1, ?2)",
                params![version, name],
            )
            .map(|_| ())
            .map_err(|e| to_storage_err(e.to_string()))
        }) {
            Ok(()) => tx.commit().map_err(|e| failed(e.to_string()))?,
            // Dropping the transaction rolls the step back.
            Err(e) => return Err(failed(e.to_string())),
        }
        info!(version, name, "applied migration");
    }

    current_version(conn)
}

/// Highest applied schema version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> LoreResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
