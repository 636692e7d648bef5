//! Migration runner: versions, idempotence, failed steps.

use lore_core::errors::StorageError;
use lore_core::LoreError;
use lore_storage::migrations::{current_version, run_migrations, LATEST_VERSION};
use rusqlite::Connection;

#[test]
fn fresh_database_reaches_latest_version() {
    let conn = Connection::open_in_memory().unwrap();
    assert_eq!(run_migrations(&conn).unwrap(), LATEST_VERSION);
    // Second run applies nothing.
    assert_eq!(run_migrations(&conn).unwrap(), LATEST_VERSION);
}

#[test]
fn failed_step_is_rolled_back_and_earlier_steps_kept() {
    let conn = Connection::open_in_memory().unwrap();
    // A plain table squatting on the index name breaks the FTS step.
    conn.execute_batch("CREATE TABLE knowledge_fts (x TEXT);")
        .unwrap();

    let err = run_migrations(&conn).unwrap_err();
    assert!(matches!(
        err,
        LoreError::StorageError(StorageError::MigrationFailed { version: 2, .. })
    ));
    assert_eq!(current_version(&conn).unwrap(), 1);

    let triggers: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'trigger'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(triggers, 0);
}

#[test]
fn newer_schema_is_refused() {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    conn.execute(
        "INSERT INTO schema_version (version, name) VALUES (?1, 'future')",
        [LATEST_VERSION + 1],
    )
    .unwrap();
    let err = run_migrations(&conn).unwrap_err();
    assert!(matches!(
        err,
        LoreError::StorageError(StorageError::CorruptionDetected { .. })
    ));
}
