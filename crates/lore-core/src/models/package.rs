use serde::{Deserialize, Serialize};

use crate::errors::{LoreError, LoreResult};
use crate::memory::{KnowledgeLevel, MemoryDraft, MemoryId};

/// Portable bundle of memories used by export and import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgePackage {
    pub version: String,
    pub package: PackageInfo,
    pub memories: Vec<MemoryDraft>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub version: String,
}

impl KnowledgePackage {
    /// Parse a package from its JSON form.
    pub fn from_json(json: &str) -> LoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> LoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Structural checks run before an import preview.
    pub fn validate(&self) -> LoreResult<()> {
        if self.version.trim().is_empty() {
            return Err(LoreError::validation("package version is required"));
        }
        if self.memories.is_empty() {
            return Err(LoreError::validation("package contains no memories"));
        }
        for (index, draft) in self.memories.iter().enumerate() {
            draft.validate().map_err(|e| match e {
                LoreError::ValidationError(msg) => {
                    LoreError::validation(format!("memory #{index}: {msg}"))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportPreview {
    pub import_id: String,
    pub total: usize,
    pub to_add: usize,
    pub to_update: usize,
    pub conflicts: Vec<ConflictInfo>,
}

/// An incoming draft that matches an existing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictInfo {
    pub existing_id: MemoryId,
    pub title: String,
    pub library_name: String,
    pub level: KnowledgeLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    pub added: usize,
    pub updated: usize,
    pub total: usize,
}
