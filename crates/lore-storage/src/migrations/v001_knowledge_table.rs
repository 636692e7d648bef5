//! v001: knowledge_base table and its lookup indexes.

use rusqlite::Connection;

use lore_core::errors::LoreResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> LoreResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS knowledge_base (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            level                 TEXT NOT NULL
                                  CHECK (level IN ('language', 'project', 'library')),
            language_tag          TEXT NOT NULL DEFAULT 'cangjie',
            library_name          TEXT,
            project_path_pattern  TEXT,
            title                 TEXT NOT NULL,
            content               TEXT NOT NULL,
            summary               TEXT,
            source                TEXT NOT NULL DEFAULT 'manual'
                                  CHECK (source IN ('manual', 'auto_captured')),
            access_count          INTEGER NOT NULL DEFAULT 0,
            confidence            REAL NOT NULL DEFAULT 1.0
                                  CHECK (confidence >= 0.0 AND confidence <= 1.0),
            created_at            TEXT NOT NULL,
            updated_at            TEXT NOT NULL,
            last_accessed_at      TEXT,
            CHECK (level != 'project'
                   OR (project_path_pattern IS NOT NULL AND project_path_pattern != ''))
        );

        CREATE INDEX IF NOT EXISTS idx_knowledge_level ON knowledge_base(level);
        CREATE INDEX IF NOT EXISTS idx_knowledge_language ON knowledge_base(language_tag);
        CREATE INDEX IF NOT EXISTS idx_knowledge_library ON knowledge_base(library_name);
        CREATE INDEX IF NOT EXISTS idx_knowledge_project ON knowledge_base(project_path_pattern);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_knowledge_merge_key
            ON knowledge_base(level, COALESCE(library_name, ''), title);
        CREATE INDEX IF NOT EXISTS idx_knowledge_created ON knowledge_base(created_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
