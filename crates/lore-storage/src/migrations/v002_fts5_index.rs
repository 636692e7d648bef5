//! v002: FTS5 external-content index on title + content + summary, with sync triggers.

use rusqlite::Connection;

use lore_core::errors::LoreResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> LoreResult<()> {
    conn.execute_batch(
        "
        CREATE VIRTUAL TABLE IF NOT EXISTS knowledge_fts USING fts5(
            title,
            content,
            summary,
            content='knowledge_base',
            content_rowid='id'
        );

        CREATE TRIGGER IF NOT EXISTS knowledge_fts_insert AFTER INSERT ON knowledge_base BEGIN
            INSERT INTO knowledge_fts(rowid, title, content, summary)
            VALUES (new.id, new.title, new.content, new.summary);
        END;

        CREATE TRIGGER IF NOT EXISTS knowledge_fts_delete BEFORE DELETE ON knowledge_base BEGIN
            INSERT INTO knowledge_fts(knowledge_fts, rowid, title, content, summary)
            VALUES ('delete', old.id, old.title, old.content, old.summary);
        END;

        CREATE TRIGGER IF NOT EXISTS knowledge_fts_update
        AFTER UPDATE OF title, content, summary ON knowledge_base BEGIN
            INSERT INTO knowledge_fts(knowledge_fts, rowid, title, content, summary)
            VALUES ('delete', old.id, old.title, old.content, old.summary);
            INSERT INTO knowledge_fts(rowid, title, content, summary)
            VALUES (new.id, new.title, new.content, new.summary);
        END;

        -- Index rows written before this migration.
        INSERT INTO knowledge_fts(knowledge_fts) VALUES ('rebuild');
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
