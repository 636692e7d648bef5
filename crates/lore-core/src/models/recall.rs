use serde::{Deserialize, Serialize};

use crate::memory::MemoryRecord;

/// A recall request as received from a caller.
///
/// `max_results` and `min_confidence` at or below zero mean "use the
/// configured default".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallQuery {
    pub query: String,
    /// Explicit scope. Validated against the three levels when non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language_tag: String,
    #[serde(rename = "library_name", skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    /// Path of the project the caller is working in.
    #[serde(rename = "project_path", skip_serializing_if = "Option::is_none")]
    pub project_context: Option<String>,
    pub max_results: i64,
    pub min_confidence: f64,
}

impl RecallQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_project_context(mut self, path: impl Into<String>) -> Self {
        self.project_context = Some(path.into());
        self
    }

    pub fn with_collection(mut self, name: impl Into<String>) -> Self {
        self.collection_name = Some(name.into());
        self
    }

    pub fn with_max_results(mut self, max: i64) -> Self {
        self.max_results = max;
        self
    }

    pub fn with_min_confidence(mut self, min: f64) -> Self {
        self.min_confidence = min;
        self
    }

    pub fn effective_max_results(&self, default: usize) -> usize {
        if self.max_results > 0 {
            self.max_results as usize
        } else {
            default
        }
    }

    pub fn effective_min_confidence(&self, default: f64) -> f64 {
        if self.min_confidence > 0.0 {
            self.min_confidence
        } else {
            default
        }
    }

    /// Project context, with empty strings treated as absent.
    pub fn project_context(&self) -> Option<&str> {
        self.project_context.as_deref().filter(|p| !p.is_empty())
    }
}

/// A recalled memory. `memory.confidence` carries the computed recall
/// score, not the persisted baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecallResult {
    #[serde(flatten)]
    pub memory: MemoryRecord,
    pub matched_text: String,
}

impl RecallResult {
    pub fn score(&self) -> f64 {
        self.memory.confidence.value()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecallResponse {
    pub total: usize,
    pub results: Vec<RecallResult>,
    /// `user_specified_<level>` or `auto_determined_<level>`.
    pub search_strategy: String,
}
