//! Structured log events for key operations.

/// A memory was stored.
pub fn memory_stored(memory_id: i64, level: &str, source: &str) {
    tracing::info!(
        event = "memory_stored",
        memory_id,
        level = %level,
        source = %source,
        "memory stored"
    );
}

/// A memory was deleted.
pub fn memory_deleted(memory_id: i64) {
    tracing::info!(event = "memory_deleted", memory_id, "memory deleted");
}

/// A recall finished.
pub fn recall_completed(strategy: &str, candidates: usize, returned: usize) {
    tracing::info!(
        event = "recall_completed",
        strategy = %strategy,
        candidates,
        returned,
        "recall completed"
    );
}

/// An import preview was registered.
pub fn import_previewed(import_id: &str, total: usize, to_add: usize, to_update: usize) {
    tracing::info!(
        event = "import_previewed",
        import_id = %import_id,
        total,
        to_add,
        to_update,
        "import previewed"
    );
}

/// An import preview was applied.
pub fn import_confirmed(import_id: &str, added: usize, updated: usize) {
    tracing::info!(
        event = "import_confirmed",
        import_id = %import_id,
        added,
        updated,
        "import confirmed"
    );
}

/// Expired previews were removed.
pub fn previews_swept(removed: usize, remaining: usize) {
    if removed > 0 {
        tracing::info!(event = "previews_swept", removed, remaining, "expired previews swept");
    } else {
        tracing::debug!(event = "previews_swept", removed, remaining, "no expired previews");
    }
}
