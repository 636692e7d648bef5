//! # lore-retrieval
//!
//! Recall pipeline: scope resolution → query building → storage candidates
//! → confidence scoring → ranking → snippet extraction → access counting.

pub mod engine;
pub mod query_builder;
pub mod ranking;
pub mod scope;
pub mod snippet;

pub use engine::RecallEngine;
pub use scope::{ScopeDecision, ScopeResolver, ScopeRules, SearchStrategy};
pub use snippet::SnippetExtractor;
