use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{AUTO_CAPTURED_CONFIDENCE, MANUAL_CONFIDENCE};
use crate::errors::LoreError;

use super::Confidence;

/// Where a memory came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeSource {
    /// Written by a human operator.
    #[default]
    Manual,
    /// Captured by an assistant during a session.
    AutoCaptured,
}

impl KnowledgeSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::AutoCaptured => "auto_captured",
        }
    }

    /// Confidence persisted when a memory from this source is first created.
    pub fn baseline_confidence(self) -> Confidence {
        match self {
            Self::Manual => Confidence::new(MANUAL_CONFIDENCE),
            Self::AutoCaptured => Confidence::new(AUTO_CAPTURED_CONFIDENCE),
        }
    }
}

impl fmt::Display for KnowledgeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnowledgeSource {
    type Err = LoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(Self::Manual),
            "auto_captured" => Ok(Self::AutoCaptured),
            other => Err(LoreError::validation(format!(
                "invalid knowledge source: {other:?} (expected manual or auto_captured)"
            ))),
        }
    }
}
