//! Scope resolution: which knowledge level a recall searches.

mod rules;

use std::fmt;

use lore_core::config::RecallConfig;
use lore_core::errors::LoreResult;
use lore_core::memory::KnowledgeLevel;

pub use rules::{ScopeRule, ScopeRules, LANGUAGE_KEYWORDS, PROJECT_KEYWORDS};

/// How the level was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    UserSpecified(KnowledgeLevel),
    AutoDetermined(KnowledgeLevel),
}

impl SearchStrategy {
    pub fn level(self) -> KnowledgeLevel {
        match self {
            Self::UserSpecified(level) | Self::AutoDetermined(level) => level,
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserSpecified(level) => write!(f, "user_specified_{level}"),
            Self::AutoDetermined(level) => write!(f, "auto_determined_{level}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeDecision {
    pub level: KnowledgeLevel,
    pub strategy: SearchStrategy,
}

/// Picks a level from an explicit request or from keyword rules.
#[derive(Debug, Clone, Default)]
pub struct ScopeResolver {
    rules: ScopeRules,
}

impl ScopeResolver {
    pub fn new(rules: ScopeRules) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &RecallConfig) -> Self {
        Self::new(ScopeRules::from_config(config))
    }

    /// An explicit, non-empty level wins and must name one of the three
    /// levels. Otherwise the rules classify the query.
    pub fn resolve(
        &self,
        query: &str,
        explicit_level: Option<&str>,
        project_context: Option<&str>,
    ) -> LoreResult<ScopeDecision> {
        if let Some(raw) = explicit_level.filter(|l| !l.is_empty()) {
            let level: KnowledgeLevel = raw.parse()?;
            return Ok(ScopeDecision {
                level,
                strategy: SearchStrategy::UserSpecified(level),
            });
        }

        let level = self.rules.classify(query, project_context);
        Ok(ScopeDecision {
            level,
            strategy: SearchStrategy::AutoDetermined(level),
        })
    }
}
