use crate::errors::LoreResult;
use crate::memory::{KnowledgeLevel, MemoryDraft, MemoryId, MemoryRecord};
use crate::models::{Categories, ExportFilter, ListFilter, ListPage, TextQuery};

/// CRUD + text query + listing + import support + access counters.
pub trait IKnowledgeStorage: Send + Sync {
    // --- CRUD ---
    /// Validate, apply defaults, and persist. Confidence is derived from the source.
    fn insert(&self, draft: &MemoryDraft) -> LoreResult<MemoryId>;
    /// Replace every creation field of an existing record.
    fn update(&self, id: MemoryId, draft: &MemoryDraft) -> LoreResult<MemoryRecord>;
    /// Import merge: refresh content, summary, source, language tag and
    /// project pattern. Identity, level, collection and title are kept.
    fn update_mutable_fields(&self, id: MemoryId, draft: &MemoryDraft) -> LoreResult<()>;
    fn delete(&self, id: MemoryId) -> LoreResult<()>;
    fn get(&self, id: MemoryId) -> LoreResult<MemoryRecord>;

    // --- Search ---
    fn text_query(&self, query: &TextQuery) -> LoreResult<Vec<MemoryRecord>>;

    // --- Listing ---
    fn list_filtered(&self, filter: &ListFilter) -> LoreResult<ListPage>;
    fn export(&self, filter: &ExportFilter) -> LoreResult<Vec<MemoryDraft>>;
    fn list_categories(&self, language_tag: &str) -> LoreResult<Categories>;

    // --- Import support ---
    fn find_by_merge_key(
        &self,
        level: KnowledgeLevel,
        collection: &str,
        title: &str,
    ) -> LoreResult<Option<MemoryId>>;

    // --- Access ---
    /// Atomic `access_count + 1` and `last_accessed_at = now`.
    fn increment_access(&self, id: MemoryId) -> LoreResult<()>;
}
