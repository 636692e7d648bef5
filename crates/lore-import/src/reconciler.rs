//! ImportReconciler: preview and confirm against the store.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use lore_core::config::ImportConfig;
use lore_core::errors::{LoreError, LoreResult};
use lore_core::memory::MemoryDraft;
use lore_core::models::{ConflictInfo, ImportPreview, ImportResult, KnowledgePackage};
use lore_core::traits::IKnowledgeStorage;
use lore_observability::events;

use crate::registry::{PreviewEntry, PreviewRegistry};

pub struct ImportReconciler<'a> {
    storage: &'a dyn IKnowledgeStorage,
    registry: &'a PreviewRegistry,
    ttl: Duration,
}

impl<'a> ImportReconciler<'a> {
    pub fn new(
        storage: &'a dyn IKnowledgeStorage,
        registry: &'a PreviewRegistry,
        config: &ImportConfig,
    ) -> Self {
        let ttl_secs = i64::try_from(config.preview_ttl_secs).unwrap_or(i64::MAX);
        Self {
            storage,
            registry,
            ttl: Duration::try_seconds(ttl_secs).unwrap_or(Duration::MAX),
        }
    }

    pub fn preview(&self, package: &KnowledgePackage) -> LoreResult<ImportPreview> {
        self.preview_at(package, Utc::now())
    }

    /// Classify every draft and register the package under a new import id
    /// that stays valid until `now + ttl`.
    pub fn preview_at(
        &self,
        package: &KnowledgePackage,
        now: DateTime<Utc>,
    ) -> LoreResult<ImportPreview> {
        let span =
            lore_observability::import_preview_span!(package.package.name, package.memories.len());
        let _guard = span.enter();

        package.validate()?;

        let drafts: Vec<MemoryDraft> = package
            .memories
            .iter()
            .cloned()
            .map(MemoryDraft::normalized)
            .collect();

        let mut conflicts = Vec::new();
        for draft in &drafts {
            if let Some(existing_id) = self.storage.find_by_merge_key(
                draft.level,
                draft.collection_key(),
                &draft.title,
            )? {
                conflicts.push(ConflictInfo {
                    existing_id,
                    title: draft.title.clone(),
                    library_name: draft.collection_key().to_string(),
                    level: draft.level,
                });
            }
        }

        let total = drafts.len();
        let to_update = conflicts.len();
        let to_add = total - to_update;
        let import_id = Uuid::new_v4().to_string();

        self.registry.insert(
            import_id.clone(),
            PreviewEntry {
                drafts,
                created_at: now,
                expires_at: now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
            },
        );
        events::import_previewed(&import_id, total, to_add, to_update);

        Ok(ImportPreview {
            import_id,
            total,
            to_add,
            to_update,
            conflicts,
        })
    }

    pub fn confirm(&self, import_id: &str) -> LoreResult<ImportResult> {
        self.confirm_at(import_id, Utc::now())
    }

    /// Apply a registered preview. The preview is consumed; if applying
    /// fails with a retryable error it is put back so the caller can retry.
    pub fn confirm_at(&self, import_id: &str, now: DateTime<Utc>) -> LoreResult<ImportResult> {
        let span = lore_observability::import_confirm_span!(import_id);
        let _guard = span.enter();

        let entry = self
            .registry
            .take(import_id, now)
            .ok_or_else(|| LoreError::PreviewExpiredOrUnknown {
                import_id: import_id.to_string(),
            })?;

        match self.apply(&entry.drafts) {
            Ok(result) => {
                events::import_confirmed(import_id, result.added, result.updated);
                Ok(result)
            }
            Err(e) => {
                if e.is_retryable() {
                    warn!(import_id, error = %e, "import failed, preview restored");
                    self.registry.restore(import_id.to_string(), entry);
                }
                Err(e)
            }
        }
    }

    fn apply(&self, drafts: &[MemoryDraft]) -> LoreResult<ImportResult> {
        let mut result = ImportResult {
            total: drafts.len(),
            ..ImportResult::default()
        };
        for draft in drafts {
            match self.storage.find_by_merge_key(
                draft.level,
                draft.collection_key(),
                &draft.title,
            )? {
                Some(id) => {
                    self.storage.update_mutable_fields(id, draft)?;
                    debug!(id, title = %draft.title, "import updated existing memory");
                    result.updated += 1;
                }
                None => {
                    let id = self.storage.insert(draft)?;
                    debug!(id, title = %draft.title, "import added memory");
                    result.added += 1;
                }
            }
        }
        Ok(result)
    }
}
