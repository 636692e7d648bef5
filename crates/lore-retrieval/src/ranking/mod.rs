//! Scoring and ranking of recall candidates.

pub mod ranker;
pub mod scorer;

use tracing::warn;

use lore_core::memory::MemoryRecord;
use lore_core::traits::IKnowledgeStorage;

pub use ranker::ScoredRecord;

/// Score → filter → sort → truncate, then count an access for every
/// returned record and no other.
pub struct RankingPipeline<'a> {
    storage: &'a dyn IKnowledgeStorage,
    min_confidence: f64,
    max_results: usize,
}

impl<'a> RankingPipeline<'a> {
    pub fn new(storage: &'a dyn IKnowledgeStorage, min_confidence: f64, max_results: usize) -> Self {
        Self {
            storage,
            min_confidence,
            max_results,
        }
    }

    pub fn rank(
        &self,
        candidates: Vec<MemoryRecord>,
        query: &str,
        project_context: Option<&str>,
    ) -> Vec<ScoredRecord> {
        let scored = candidates
            .into_iter()
            .map(|record| {
                let score = scorer::score(&record, query, project_context);
                ScoredRecord { record, score }
            })
            .collect();

        let ranked = ranker::rank(scored, self.min_confidence, self.max_results);

        // A failed increment never fails the recall.
        for result in &ranked {
            if let Err(e) = self.storage.increment_access(result.record.id) {
                warn!(id = result.record.id, error = %e, "failed to record access");
            }
        }
        ranked
    }
}
