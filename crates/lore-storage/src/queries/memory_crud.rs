//! Insert, update, get, delete for knowledge records.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};

use lore_core::errors::{LoreError, LoreResult};
use lore_core::memory::{
    Confidence, KnowledgeLevel, KnowledgeSource, MemoryDraft, MemoryId, MemoryRecord,
};

use crate::to_storage_err;

/// Column list matching [`row_to_record`].
pub(crate) const RECORD_COLUMNS: &str = "id, level, language_tag, library_name, \
    project_path_pattern, title, content, summary, source, access_count, confidence, \
    created_at, updated_at, last_accessed_at";

/// Same columns with content blanked, for brief listings.
pub(crate) const BRIEF_RECORD_COLUMNS: &str = "id, level, language_tag, library_name, \
    project_path_pattern, title, '' AS content, summary, source, access_count, confidence, \
    created_at, updated_at, last_accessed_at";

/// Timestamps are stored as fixed-width RFC 3339 so text order is time order.
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Map a write failure, turning a merge-key collision into a validation error.
fn write_err(e: rusqlite::Error, draft: &MemoryDraft) -> LoreError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            LoreError::validation(format!(
                "a {} memory titled {:?} already exists in collection {:?}",
                draft.level,
                draft.title,
                draft.collection_key()
            ))
        }
        _ => to_storage_err(e.to_string()),
    }
}

/// Insert a normalized, validated draft. Returns the new row id.
pub fn insert_memory(conn: &Connection, draft: &MemoryDraft) -> LoreResult<MemoryId> {
    let source = draft.effective_source();
    let now = now_rfc3339();
    conn.execute(
        "INSERT INTO knowledge_base (
            level, language_tag, library_name, project_path_pattern,
            title, content, summary, source, confidence, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
        params![
            draft.level.as_str(),
            draft.language_tag,
            draft.collection_name,
            draft.project_path_pattern,
            draft.title,
            draft.content,
            draft.summary,
            source.as_str(),
            source.baseline_confidence().value(),
            now,
        ],
    )
    .map_err(|e| write_err(e, draft))?;
    Ok(conn.last_insert_rowid())
}

/// Get a single record by id.
pub fn get_memory(conn: &Connection, id: MemoryId) -> LoreResult<Option<MemoryRecord>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {RECORD_COLUMNS} FROM knowledge_base WHERE id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = stmt
        .query_row(params![id], |row| Ok(row_to_record(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    result.transpose()
}

/// Replace every creation field. Confidence keeps its creation value.
/// Returns false when no row has this id.
pub fn update_memory(conn: &Connection, id: MemoryId, draft: &MemoryDraft) -> LoreResult<bool> {
    let changed = conn
        .execute(
            "UPDATE knowledge_base
             SET level = ?1, language_tag = ?2, library_name = ?3, project_path_pattern = ?4,
                 title = ?5, content = ?6, summary = ?7, source = ?8, updated_at = ?9
             WHERE id = ?10",
            params![
                draft.level.as_str(),
                draft.language_tag,
                draft.collection_name,
                draft.project_path_pattern,
                draft.title,
                draft.content,
                draft.summary,
                draft.effective_source().as_str(),
                now_rfc3339(),
                id,
            ],
        )
        .map_err(|e| write_err(e, draft))?;
    Ok(changed > 0)
}

/// Import merge update. Level, library and title stay as they are.
pub fn update_mutable_fields(
    conn: &Connection,
    id: MemoryId,
    draft: &MemoryDraft,
) -> LoreResult<bool> {
    let changed = conn
        .execute(
            "UPDATE knowledge_base
             SET language_tag = ?1, project_path_pattern = ?2, content = ?3, summary = ?4,
                 source = ?5, updated_at = ?6
             WHERE id = ?7",
            params![
                draft.language_tag,
                draft.project_path_pattern,
                draft.content,
                draft.summary,
                draft.effective_source().as_str(),
                now_rfc3339(),
                id,
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}

/// Returns false when no row has this id.
pub fn delete_memory(conn: &Connection, id: MemoryId) -> LoreResult<bool> {
    let changed = conn
        .execute("DELETE FROM knowledge_base WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}

/// Parse a row selected with [`RECORD_COLUMNS`] or [`BRIEF_RECORD_COLUMNS`].
pub(crate) fn row_to_record(row: &rusqlite::Row<'_>) -> LoreResult<MemoryRecord> {
    let level_str: String = row.get(1).map_err(|e| to_storage_err(e.to_string()))?;
    let source_str: String = row.get(8).map_err(|e| to_storage_err(e.to_string()))?;
    let level: KnowledgeLevel = level_str
        .parse()
        .map_err(|e| to_storage_err(format!("parse level '{level_str}': {e}")))?;
    let source: KnowledgeSource = source_str
        .parse()
        .map_err(|e| to_storage_err(format!("parse source '{source_str}': {e}")))?;

    let created_str: String = row.get(11).map_err(|e| to_storage_err(e.to_string()))?;
    let updated_str: String = row.get(12).map_err(|e| to_storage_err(e.to_string()))?;
    let accessed_str: Option<String> = row.get(13).map_err(|e| to_storage_err(e.to_string()))?;

    Ok(MemoryRecord {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        level,
        language_tag: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        collection_name: row.get(3).map_err(|e| to_storage_err(e.to_string()))?,
        project_path_pattern: row.get(4).map_err(|e| to_storage_err(e.to_string()))?,
        title: row.get(5).map_err(|e| to_storage_err(e.to_string()))?,
        content: row.get(6).map_err(|e| to_storage_err(e.to_string()))?,
        summary: row.get(7).map_err(|e| to_storage_err(e.to_string()))?,
        source,
        access_count: row
            .get::<_, i64>(9)
            .map_err(|e| to_storage_err(e.to_string()))?
            .max(0) as u64,
        confidence: Confidence::new(row.get(10).map_err(|e| to_storage_err(e.to_string()))?),
        created_at: parse_dt(&created_str)?,
        updated_at: parse_dt(&updated_str)?,
        last_accessed_at: accessed_str.as_deref().map(parse_dt).transpose()?,
    })
}

fn parse_dt(s: &str) -> LoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("parse datetime '{s}': {e}")))
}

/// Helper trait to make `query_row` return `Option` on not-found.
pub(crate) trait OptionalRow<T> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalRow<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
