//! KnowledgeRuntime: owns storage, configuration and the import preview
//! registry. Engines borrow the storage for the duration of one call.
//!
//! Every operation is synchronous. Writes wait on the single write
//! connection for the length of one statement batch.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use lore_core::config::LoreConfig;
use lore_core::constants::DEFAULT_LANGUAGE_TAG;
use lore_core::errors::LoreResult;
use lore_core::memory::{MemoryDraft, MemoryId, MemoryRecord};
use lore_core::models::{
    Categories, ExportFilter, ImportPreview, ImportResult, KnowledgePackage, ListFilter, ListPage,
    RecallQuery, RecallResponse,
};
use lore_core::traits::IKnowledgeStorage;
use lore_import::{ImportReconciler, PreviewRegistry, SweeperHandle};
use lore_observability::events;
use lore_retrieval::RecallEngine;
use lore_storage::StorageEngine;

/// Options for building a runtime.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// Path to the SQLite database. Overrides `storage.db_path` from the
    /// config; if both are unset, uses in-memory.
    pub db_path: Option<PathBuf>,
    /// TOML configuration string. If None, uses defaults.
    pub config_toml: Option<String>,
    /// Install the global tracing subscriber from the observability config.
    pub init_tracing: bool,
}

pub struct KnowledgeRuntime {
    pub storage: Arc<StorageEngine>,
    pub previews: Arc<PreviewRegistry>,
    pub config: LoreConfig,
}

impl KnowledgeRuntime {
    pub fn new(opts: RuntimeOptions) -> LoreResult<Self> {
        let config = match &opts.config_toml {
            Some(toml_str) => LoreConfig::from_toml(toml_str)?,
            None => LoreConfig::default(),
        };

        if opts.init_tracing {
            lore_observability::init_tracing_from_config(&config.observability);
        }

        let db_path = opts
            .db_path
            .clone()
            .or_else(|| config.storage.db_path.as_ref().map(PathBuf::from));
        let storage = match &db_path {
            Some(path) => StorageEngine::open_with_config(path, &config.storage)?,
            None => StorageEngine::open_in_memory()?,
        };
        info!(
            db = ?db_path,
            schema_version = storage.schema_version()?,
            "knowledge runtime ready"
        );

        Ok(Self {
            storage: Arc::new(storage),
            previews: Arc::new(PreviewRegistry::new()),
            config,
        })
    }

    fn store_ref(&self) -> &dyn IKnowledgeStorage {
        self.storage.as_ref()
    }

    // --- Memories ---

    pub fn store(&self, draft: &MemoryDraft) -> LoreResult<MemoryId> {
        let id = self.storage.insert(draft)?;
        events::memory_stored(id, draft.level.as_str(), draft.effective_source().as_str());
        Ok(id)
    }

    pub fn get(&self, id: MemoryId) -> LoreResult<MemoryRecord> {
        self.storage.get(id)
    }

    pub fn update(&self, id: MemoryId, draft: &MemoryDraft) -> LoreResult<MemoryRecord> {
        self.storage.update(id, draft)
    }

    pub fn delete(&self, id: MemoryId) -> LoreResult<()> {
        self.storage.delete(id)?;
        events::memory_deleted(id);
        Ok(())
    }

    pub fn list(&self, filter: &ListFilter) -> LoreResult<ListPage> {
        self.storage.list_filtered(filter)
    }

    /// Libraries and project patterns with their memory counts. An empty
    /// tag means the default language.
    pub fn list_categories(&self, language_tag: &str) -> LoreResult<Categories> {
        let tag = if language_tag.is_empty() {
            DEFAULT_LANGUAGE_TAG
        } else {
            language_tag
        };
        self.storage.list_categories(tag)
    }

    // --- Recall ---

    pub fn recall(&self, query: &RecallQuery) -> LoreResult<RecallResponse> {
        RecallEngine::new(self.store_ref(), self.config.recall.clone()).recall(query)
    }

    // --- Packages ---

    pub fn export(&self, filter: &ExportFilter) -> LoreResult<KnowledgePackage> {
        lore_import::export_package(self.store_ref(), filter)
    }

    pub fn preview_import(&self, package: &KnowledgePackage) -> LoreResult<ImportPreview> {
        self.reconciler().preview(package)
    }

    pub fn confirm_import(&self, import_id: &str) -> LoreResult<ImportResult> {
        self.reconciler().confirm(import_id)
    }

    fn reconciler(&self) -> ImportReconciler<'_> {
        ImportReconciler::new(self.store_ref(), &self.previews, &self.config.import)
    }

    /// Start the expired-preview sweeper on the current Tokio runtime.
    /// Dropping or aborting the handle stops it.
    pub fn spawn_preview_sweeper(&self) -> SweeperHandle {
        lore_import::spawn_preview_sweeper(
            Arc::clone(&self.previews),
            Duration::from_secs(self.config.import.sweep_interval_secs),
        )
    }
}
