use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LANGUAGE_TAG;
use crate::errors::LoreError;
use crate::memory::{KnowledgeLevel, MemoryRecord};

/// Sort key for listings. Always descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    #[default]
    CreatedAt,
    UpdatedAt,
    AccessCount,
}

impl OrderBy {
    pub fn as_column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::AccessCount => "access_count",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_column())
    }
}

impl FromStr for OrderBy {
    type Err = LoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "created_at" => Ok(Self::CreatedAt),
            "updated_at" => Ok(Self::UpdatedAt),
            "access_count" => Ok(Self::AccessCount),
            other => Err(LoreError::validation(format!("invalid order_by: {other}"))),
        }
    }
}

/// Paged listing filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListFilter {
    pub level: Option<KnowledgeLevel>,
    #[serde(rename = "library_name")]
    pub collection_name: Option<String>,
    pub project_path_pattern: Option<String>,
    pub language_tag: String,
    pub order_by: OrderBy,
    pub limit: usize,
    pub offset: usize,
    /// Omit content from the returned records.
    pub brief: bool,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            level: None,
            collection_name: None,
            project_path_pattern: None,
            language_tag: DEFAULT_LANGUAGE_TAG.to_string(),
            order_by: OrderBy::default(),
            limit: crate::config::defaults::DEFAULT_LIST_LIMIT,
            offset: 0,
            brief: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPage {
    /// Matching rows before paging.
    pub total: u64,
    pub results: Vec<MemoryRecord>,
}

/// Export selection. Unset fields do not filter, except the language tag
/// which defaults to `cangjie`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportFilter {
    pub level: Option<KnowledgeLevel>,
    #[serde(rename = "library_name")]
    pub collection_name: Option<String>,
    pub project_path_pattern: Option<String>,
    pub language_tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: u64,
}

/// Library and project groupings, each by count descending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Categories {
    pub libraries: Vec<CategoryCount>,
    pub projects: Vec<CategoryCount>,
}
