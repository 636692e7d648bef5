//! Library and project groupings for category listings.

use rusqlite::{params, Connection};

use lore_core::errors::LoreResult;
use lore_core::models::{Categories, CategoryCount};

use crate::to_storage_err;

/// Count records per library and per project pattern for one language.
pub fn list_categories(conn: &Connection, language_tag: &str) -> LoreResult<Categories> {
    let libraries = group_counts(
        conn,
        "SELECT library_name, COUNT(*) AS count
         FROM knowledge_base
         WHERE level = 'library' AND library_name IS NOT NULL AND library_name != ''
           AND language_tag = ?1
         GROUP BY library_name
         ORDER BY count DESC, library_name ASC",
        language_tag,
    )?;
    let projects = group_counts(
        conn,
        "SELECT project_path_pattern, COUNT(*) AS count
         FROM knowledge_base
         WHERE level = 'project' AND project_path_pattern IS NOT NULL
           AND project_path_pattern != '' AND language_tag = ?1
         GROUP BY project_path_pattern
         ORDER BY count DESC, project_path_pattern ASC",
        language_tag,
    )?;
    Ok(Categories {
        libraries,
        projects,
    })
}

fn group_counts(conn: &Connection, sql: &str, language_tag: &str) -> LoreResult<Vec<CategoryCount>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![language_tag], |row| {
            Ok(CategoryCount {
                name: row.get(0)?,
                count: row.get::<_, i64>(1)?.max(0) as u64,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
