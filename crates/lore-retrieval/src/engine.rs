//! RecallEngine: orchestrates one recall from request to ranked, snippeted
//! results.

use tracing::debug;

use lore_core::config::RecallConfig;
use lore_core::constants::DEFAULT_LANGUAGE_TAG;
use lore_core::errors::{LoreError, LoreResult};
use lore_core::memory::Confidence;
use lore_core::models::{RecallQuery, RecallResponse, RecallResult, TextQuery};
use lore_core::traits::IKnowledgeStorage;
use lore_observability::events;

use crate::query_builder;
use crate::ranking::RankingPipeline;
use crate::scope::ScopeResolver;
use crate::snippet::SnippetExtractor;

pub struct RecallEngine<'a> {
    storage: &'a dyn IKnowledgeStorage,
    resolver: ScopeResolver,
    snippets: SnippetExtractor,
    config: RecallConfig,
}

impl<'a> RecallEngine<'a> {
    pub fn new(storage: &'a dyn IKnowledgeStorage, config: RecallConfig) -> Self {
        Self {
            storage,
            resolver: ScopeResolver::from_config(&config),
            snippets: SnippetExtractor::new(config.snippet_max_len),
            config,
        }
    }

    /// Replace the keyword rules derived from config.
    pub fn with_resolver(mut self, resolver: ScopeResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn recall(&self, query: &RecallQuery) -> LoreResult<RecallResponse> {
        if query.query.trim().is_empty() {
            return Err(LoreError::validation("query is required"));
        }

        let max_results = query.effective_max_results(self.config.default_max_results);
        let min_confidence = query.effective_min_confidence(self.config.default_min_confidence);
        let project_context = query.project_context();

        let decision =
            self.resolver
                .resolve(&query.query, query.level.as_deref(), project_context)?;
        let span = lore_observability::recall_span!(query.query, decision.level);
        let _guard = span.enter();

        let language_tag = if query.language_tag.is_empty() {
            DEFAULT_LANGUAGE_TAG.to_string()
        } else {
            query.language_tag.clone()
        };

        let text_query = TextQuery {
            expression: query_builder::build(&query.query),
            level: decision.level,
            language_tag,
            collection_name: query.collection_name.clone().filter(|c| !c.is_empty()),
            project_context: project_context.map(str::to_string),
            fts_cap: self.config.fts_candidate_cap,
            limit: max_results.saturating_mul(self.config.candidate_multiplier.max(1)),
        };
        let candidates = self.storage.text_query(&text_query)?;
        let candidate_count = candidates.len();
        debug!(
            candidates = candidate_count,
            expression = %text_query.expression,
            strategy = %decision.strategy,
            "candidates fetched"
        );

        let ranked = RankingPipeline::new(self.storage, min_confidence, max_results).rank(
            candidates,
            &query.query,
            project_context,
        );

        let results: Vec<RecallResult> = ranked
            .into_iter()
            .map(|scored| {
                let matched_text = self.snippets.extract(&scored.record.content, &query.query);
                let mut memory = scored.record;
                memory.confidence = Confidence::new(scored.score);
                RecallResult {
                    memory,
                    matched_text,
                }
            })
            .collect();

        let search_strategy = decision.strategy.to_string();
        events::recall_completed(&search_strategy, candidate_count, results.len());

        Ok(RecallResponse {
            total: results.len(),
            results,
            search_strategy,
        })
    }
}
