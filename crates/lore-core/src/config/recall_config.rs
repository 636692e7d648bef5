use serde::{Deserialize, Serialize};

use super::defaults;

/// Recall subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    /// Results returned when a query leaves `max_results` unset.
    pub default_max_results: usize,
    /// Threshold applied when a query leaves `min_confidence` unset.
    pub default_min_confidence: f64,
    /// Candidates fetched per requested result before re-scoring.
    pub candidate_multiplier: usize,
    /// Upper bound on FTS5 matches considered per query (bm25 order).
    pub fts_candidate_cap: usize,
    /// Content length under which snippets are returned whole.
    pub snippet_max_len: usize,
    /// Project keyword override. Empty keeps the built-in list.
    pub project_keywords: Vec<String>,
    /// Language keyword override. Empty keeps the built-in list.
    pub language_keywords: Vec<String>,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            default_max_results: defaults::DEFAULT_MAX_RESULTS,
            default_min_confidence: defaults::DEFAULT_MIN_CONFIDENCE,
            candidate_multiplier: defaults::DEFAULT_CANDIDATE_MULTIPLIER,
            fts_candidate_cap: defaults::DEFAULT_FTS_CANDIDATE_CAP,
            snippet_max_len: defaults::DEFAULT_SNIPPET_MAX_LEN,
            project_keywords: Vec::new(),
            language_keywords: Vec::new(),
        }
    }
}
