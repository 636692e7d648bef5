use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{Confidence, KnowledgeLevel, KnowledgeSource};
use crate::constants::DEFAULT_LANGUAGE_TAG;
use crate::errors::{LoreError, LoreResult};

/// Storage-assigned row identifier.
pub type MemoryId = i64;

/// A persisted memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub id: MemoryId,
    pub level: KnowledgeLevel,
    pub language_tag: String,
    /// Library the memory belongs to. Only meaningful at library level.
    #[serde(rename = "library_name", default, skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    /// Glob over project paths. Required at project level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_path_pattern: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub source: KnowledgeSource,
    pub access_count: u64,
    /// Baseline confidence persisted at creation.
    pub confidence: Confidence,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed_at: Option<DateTime<Utc>>,
}

impl MemoryRecord {
    /// The creation fields of this record, in knowledge package form.
    pub fn to_draft(&self) -> MemoryDraft {
        MemoryDraft {
            level: self.level,
            language_tag: self.language_tag.clone(),
            collection_name: self.collection_name.clone(),
            project_path_pattern: self.project_path_pattern.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            summary: self.summary.clone(),
            source: Some(self.source),
        }
    }
}

/// Creation fields of a memory. Used by store, update, export and import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryDraft {
    pub level: KnowledgeLevel,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language_tag: String,
    #[serde(rename = "library_name", default, skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_path_pattern: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_source_as_none"
    )]
    pub source: Option<KnowledgeSource>,
}

impl MemoryDraft {
    pub fn new(level: KnowledgeLevel, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            level,
            language_tag: String::new(),
            collection_name: None,
            project_path_pattern: None,
            title: title.into(),
            content: content.into(),
            summary: None,
            source: None,
        }
    }

    pub fn with_language_tag(mut self, tag: impl Into<String>) -> Self {
        self.language_tag = tag.into();
        self
    }

    pub fn with_collection(mut self, name: impl Into<String>) -> Self {
        self.collection_name = Some(name.into());
        self
    }

    pub fn with_project_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.project_path_pattern = Some(pattern.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_source(mut self, source: KnowledgeSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Source with the `manual` default applied.
    pub fn effective_source(&self) -> KnowledgeSource {
        self.source.unwrap_or_default()
    }

    /// Collection name as used in the (level, collection, title) merge key.
    pub fn collection_key(&self) -> &str {
        self.collection_name.as_deref().unwrap_or("")
    }

    /// Check the level-specific invariants.
    pub fn validate(&self) -> LoreResult<()> {
        if self.title.trim().is_empty() {
            return Err(LoreError::validation("title is required"));
        }
        if self.content.trim().is_empty() {
            return Err(LoreError::validation("content is required"));
        }
        if self.level == KnowledgeLevel::Project
            && self
                .project_path_pattern
                .as_deref()
                .map_or(true, |p| p.trim().is_empty())
        {
            return Err(LoreError::validation(
                "project_path_pattern is required for project level",
            ));
        }
        Ok(())
    }

    /// Apply defaults: language tag, source, and empty optionals collapsed to `None`.
    pub fn normalized(mut self) -> Self {
        if self.language_tag.trim().is_empty() {
            self.language_tag = DEFAULT_LANGUAGE_TAG.to_string();
        }
        self.source = Some(self.effective_source());
        self.collection_name = non_empty(self.collection_name);
        self.project_path_pattern = non_empty(self.project_path_pattern);
        self.summary = non_empty(self.summary);
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn empty_source_as_none<'de, D>(deserializer: D) -> Result<Option<KnowledgeSource>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
