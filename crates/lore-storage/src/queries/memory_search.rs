//! FTS5 candidate queries for recall.

use rusqlite::{params, Connection};

use lore_core::errors::LoreResult;
use lore_core::memory::MemoryRecord;
use lore_core::models::TextQuery;

use super::memory_crud::{row_to_record, RECORD_COLUMNS};
use crate::to_storage_err;

/// Quote every whitespace-separated token as an FTS5 string literal, so
/// operators and punctuation in user text are matched literally. Adjacent
/// literals are an implicit AND.
pub fn fts_match_expression(expression: &str) -> String {
    expression
        .split_whitespace()
        .map(|token| format!("\"{}\"", token.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Candidates for one recall: restricted to level and language (and the
/// optional library and project context), drawn from the best `fts_cap`
/// bm25 matches, ordered by persisted confidence then access count.
pub fn text_query(conn: &Connection, query: &TextQuery) -> LoreResult<Vec<MemoryRecord>> {
    let fts_expression = fts_match_expression(&query.expression);
    if fts_expression.is_empty() || query.limit == 0 {
        return Ok(Vec::new());
    }

    let mut stmt = conn
        .prepare(&format!(
            "SELECT {RECORD_COLUMNS}
             FROM knowledge_base
             WHERE language_tag = ?1
               AND level = ?2
               AND (?3 IS NULL OR library_name = ?3)
               AND (?4 IS NULL
                    OR project_path_pattern IS NULL
                    OR project_path_pattern = ''
                    OR ?4 GLOB project_path_pattern)
               AND id IN (
                   SELECT rowid FROM knowledge_fts
                   WHERE knowledge_fts MATCH ?5
                   ORDER BY bm25(knowledge_fts)
                   LIMIT ?6
               )
             ORDER BY confidence DESC, access_count DESC
             LIMIT ?7"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(
            params![
                query.language_tag,
                query.level.as_str(),
                query.collection_name.as_deref().filter(|c| !c.is_empty()),
                query.project_context.as_deref().filter(|p| !p.is_empty()),
                fts_expression,
                query.fts_cap as i64,
                query.limit as i64,
            ],
            |row| Ok(row_to_record(row)),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let record = row.map_err(|e| to_storage_err(e.to_string()))??;
        results.push(record);
    }
    Ok(results)
}
