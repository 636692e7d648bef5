use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LoreError;

/// The three tiers of the knowledge hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeLevel {
    /// Syntax, keywords, and core semantics of the language itself.
    Language,
    /// Conventions and configuration scoped to one project path.
    Project,
    /// Patterns and practices around a shared library.
    Library,
}

impl KnowledgeLevel {
    pub const ALL: [KnowledgeLevel; 3] = [Self::Language, Self::Project, Self::Library];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Project => "project",
            Self::Library => "library",
        }
    }
}

impl fmt::Display for KnowledgeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnowledgeLevel {
    type Err = LoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "language" => Ok(Self::Language),
            "project" => Ok(Self::Project),
            "library" => Ok(Self::Library),
            other => Err(LoreError::validation(format!(
                "invalid knowledge level: {other:?} (expected language, project or library)"
            ))),
        }
    }
}
