//! Threshold filter, stable descending sort, truncation.

use lore_core::memory::MemoryRecord;

/// A candidate with its computed recall score.
#[derive(Debug, Clone)]
pub struct ScoredRecord {
    pub record: MemoryRecord,
    pub score: f64,
}

/// Keep candidates scoring at least `min_confidence`, best first, at most
/// `max_results`. Equal scores keep their candidate order.
pub fn rank(
    candidates: Vec<ScoredRecord>,
    min_confidence: f64,
    max_results: usize,
) -> Vec<ScoredRecord> {
    let mut kept: Vec<ScoredRecord> = candidates
        .into_iter()
        .filter(|c| c.score >= min_confidence)
        .collect();
    kept.sort_by(|a, b| b.score.total_cmp(&a.score));
    kept.truncate(max_results);
    kept
}
