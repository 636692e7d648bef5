//! Filtered listing, export, and merge-key lookup.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};

use lore_core::config::defaults::DEFAULT_LIST_LIMIT;
use lore_core::constants::DEFAULT_LANGUAGE_TAG;
use lore_core::errors::LoreResult;
use lore_core::memory::{KnowledgeLevel, MemoryDraft, MemoryId, MemoryRecord};
use lore_core::models::{ExportFilter, ListFilter, ListPage};

use super::memory_crud::{row_to_record, OptionalRow, BRIEF_RECORD_COLUMNS, RECORD_COLUMNS};
use crate::to_storage_err;

/// Equality filters shared by listing and export.
struct WhereClause {
    sql: String,
    args: Vec<Value>,
}

impl WhereClause {
    fn new(language_tag: &str) -> Self {
        let tag = if language_tag.is_empty() {
            DEFAULT_LANGUAGE_TAG
        } else {
            language_tag
        };
        Self {
            sql: "WHERE language_tag = ?".to_string(),
            args: vec![Value::Text(tag.to_string())],
        }
    }

    fn eq(mut self, column: &str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.sql.push_str(&format!(" AND {column} = ?"));
            self.args.push(Value::Text(v.to_string()));
        }
        self
    }

    fn level(self, level: Option<KnowledgeLevel>) -> Self {
        self.eq("level", level.map(KnowledgeLevel::as_str))
    }
}

/// Page through records matching the filter. `total` counts before paging.
pub fn list_filtered(conn: &Connection, filter: &ListFilter) -> LoreResult<ListPage> {
    let clause = WhereClause::new(&filter.language_tag)
        .level(filter.level)
        .eq("library_name", filter.collection_name.as_deref())
        .eq("project_path_pattern", filter.project_path_pattern.as_deref());

    let total: i64 = conn
        .query_row(
            &format!("SELECT COUNT(*) FROM knowledge_base {}", clause.sql),
            params_from_iter(clause.args.iter()),
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let columns = if filter.brief {
        BRIEF_RECORD_COLUMNS
    } else {
        RECORD_COLUMNS
    };
    let limit = if filter.limit == 0 {
        DEFAULT_LIST_LIMIT
    } else {
        filter.limit
    };

    let mut args = clause.args.clone();
    args.push(Value::Integer(limit as i64));
    args.push(Value::Integer(filter.offset as i64));

    let mut stmt = conn
        .prepare(&format!(
            "SELECT {columns} FROM knowledge_base {}
             ORDER BY {} DESC, id DESC
             LIMIT ? OFFSET ?",
            clause.sql,
            filter.order_by.as_column(),
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params_from_iter(args.iter()), |row| Ok(row_to_record(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results: Vec<MemoryRecord> = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }

    Ok(ListPage {
        total: total.max(0) as u64,
        results,
    })
}

/// Creation fields of every matching record, newest first.
pub fn export(conn: &Connection, filter: &ExportFilter) -> LoreResult<Vec<MemoryDraft>> {
    let clause = WhereClause::new(filter.language_tag.as_deref().unwrap_or(""))
        .level(filter.level)
        .eq("library_name", filter.collection_name.as_deref())
        .eq("project_path_pattern", filter.project_path_pattern.as_deref());

    let mut stmt = conn
        .prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM knowledge_base {}
             ORDER BY created_at DESC, id DESC",
            clause.sql
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params_from_iter(clause.args.iter()), |row| {
            Ok(row_to_record(row))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut drafts = Vec::new();
    for row in rows {
        let record = row.map_err(|e| to_storage_err(e.to_string()))??;
        drafts.push(record.to_draft());
    }
    Ok(drafts)
}

/// First record with the same (level, library, title). A missing library
/// and an empty one are the same key.
pub fn find_by_merge_key(
    conn: &Connection,
    level: KnowledgeLevel,
    collection: &str,
    title: &str,
) -> LoreResult<Option<MemoryId>> {
    conn.query_row(
        "SELECT id FROM knowledge_base
         WHERE level = ?1 AND COALESCE(library_name, '') = ?2 AND title = ?3
         ORDER BY id ASC
         LIMIT 1",
        params![level.as_str(), collection, title],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}
