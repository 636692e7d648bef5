//! StorageEngine: owns the ConnectionPool, runs migrations at startup, and
//! implements IKnowledgeStorage.

use std::path::Path;

use tracing::{debug, warn};

use lore_core::config::StorageConfig;
use lore_core::errors::{LoreError, LoreResult};
use lore_core::memory::{KnowledgeLevel, MemoryDraft, MemoryId, MemoryRecord};
use lore_core::models::{Categories, ExportFilter, ListFilter, ListPage, TextQuery};
use lore_core::traits::IKnowledgeStorage;

use crate::migrations;
use crate::pool::{pragmas, ConnectionPool};
use crate::queries::{access, aggregation, memory_crud, memory_query, memory_search};

/// The main storage engine.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// File-backed engines read through the pool. In-memory engines route
    /// reads through the writer, since a second in-memory connection is a
    /// different database.
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a file-backed engine with default settings.
    pub fn open(path: &Path) -> LoreResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed engine at `path`. Warns when WAL was requested
    /// but SQLite kept another journal mode.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> LoreResult<Self> {
        let pool = ConnectionPool::open(path, config)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        if config.wal_mode && !engine.is_wal()? {
            warn!(path = %path.display(), "WAL journal mode requested but not active");
        }
        Ok(engine)
    }

    /// Open an in-memory engine (tests, ephemeral runtimes).
    pub fn open_in_memory() -> LoreResult<Self> {
        let pool = ConnectionPool::open_in_memory(&StorageConfig::default())?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> LoreResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            let version = migrations::run_migrations(conn)?;
            debug!(schema_version = version, "storage initialized");
            Ok(())
        })
    }

    /// The connection pool, for maintenance and tests.
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Whether the write connection runs in WAL journal mode.
    pub fn is_wal(&self) -> LoreResult<bool> {
        self.pool.writer.with_conn_sync(pragmas::verify_wal_mode)
    }

    /// Current schema version.
    pub fn schema_version(&self) -> LoreResult<u32> {
        self.pool.writer.with_conn_sync(migrations::current_version)
    }

    fn with_reader<F, T>(&self, f: F) -> LoreResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> LoreResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }
}

impl IKnowledgeStorage for StorageEngine {
    fn insert(&self, draft: &MemoryDraft) -> LoreResult<MemoryId> {
        draft.validate()?;
        let draft = draft.clone().normalized();
        let id = self
            .pool
            .writer
            .with_conn_sync(|conn| memory_crud::insert_memory(conn, &draft))?;
        debug!(id, level = %draft.level, source = %draft.effective_source(), "memory inserted");
        Ok(id)
    }

    fn update(&self, id: MemoryId, draft: &MemoryDraft) -> LoreResult<MemoryRecord> {
        draft.validate()?;
        let draft = draft.clone().normalized();
        self.pool.writer.with_conn_sync(|conn| {
            if !memory_crud::update_memory(conn, id, &draft)? {
                return Err(LoreError::MemoryNotFound { id });
            }
            memory_crud::get_memory(conn, id)?.ok_or(LoreError::MemoryNotFound { id })
        })
    }

    fn update_mutable_fields(&self, id: MemoryId, draft: &MemoryDraft) -> LoreResult<()> {
        let draft = draft.clone().normalized();
        let found = self
            .pool
            .writer
            .with_conn_sync(|conn| memory_crud::update_mutable_fields(conn, id, &draft))?;
        if found {
            Ok(())
        } else {
            Err(LoreError::MemoryNotFound { id })
        }
    }

    fn delete(&self, id: MemoryId) -> LoreResult<()> {
        let found = self
            .pool
            .writer
            .with_conn_sync(|conn| memory_crud::delete_memory(conn, id))?;
        if found {
            Ok(())
        } else {
            Err(LoreError::MemoryNotFound { id })
        }
    }

    fn get(&self, id: MemoryId) -> LoreResult<MemoryRecord> {
        self.with_reader(|conn| memory_crud::get_memory(conn, id))?
            .ok_or(LoreError::MemoryNotFound { id })
    }

    fn text_query(&self, query: &TextQuery) -> LoreResult<Vec<MemoryRecord>> {
        self.with_reader(|conn| memory_search::text_query(conn, query))
    }

    fn list_filtered(&self, filter: &ListFilter) -> LoreResult<ListPage> {
        self.with_reader(|conn| memory_query::list_filtered(conn, filter))
    }

    fn export(&self, filter: &ExportFilter) -> LoreResult<Vec<MemoryDraft>> {
        self.with_reader(|conn| memory_query::export(conn, filter))
    }

    fn list_categories(&self, language_tag: &str) -> LoreResult<Categories> {
        self.with_reader(|conn| aggregation::list_categories(conn, language_tag))
    }

    fn find_by_merge_key(
        &self,
        level: KnowledgeLevel,
        collection: &str,
        title: &str,
    ) -> LoreResult<Option<MemoryId>> {
        self.with_reader(|conn| memory_query::find_by_merge_key(conn, level, collection, title))
    }

    fn increment_access(&self, id: MemoryId) -> LoreResult<()> {
        let found = self
            .pool
            .writer
            .with_conn_sync(|conn| access::increment_access(conn, id))?;
        if !found {
            warn!(id, "access increment for missing memory");
            return Err(LoreError::MemoryNotFound { id });
        }
        Ok(())
    }
}
