use crate::memory::KnowledgeLevel;

/// Candidate fetch handed to storage by the recall engine.
#[derive(Debug, Clone)]
pub struct TextQuery {
    /// Output of the query builder.
    pub expression: String,
    pub level: KnowledgeLevel,
    pub language_tag: String,
    pub collection_name: Option<String>,
    /// Restricts to records whose pattern is empty or globs this path.
    pub project_context: Option<String>,
    /// Inner full-text cap, best bm25 first.
    pub fts_cap: usize,
    pub limit: usize,
}
