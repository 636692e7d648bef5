//! Configuration, loadable from TOML. Every section falls back to defaults.

pub mod defaults;
mod import_config;
mod observability_config;
mod recall_config;
mod storage_config;

use serde::{Deserialize, Serialize};

pub use import_config::ImportConfig;
pub use observability_config::ObservabilityConfig;
pub use recall_config::RecallConfig;
pub use storage_config::StorageConfig;

use crate::errors::{LoreError, LoreResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoreConfig {
    pub storage: StorageConfig,
    pub recall: RecallConfig,
    pub import: ImportConfig,
    pub observability: ObservabilityConfig,
}

impl LoreConfig {
    /// Parse a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml(input: &str) -> LoreResult<Self> {
        toml::from_str(input).map_err(|e| LoreError::ConfigError(e.to_string()))
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> LoreResult<String> {
        toml::to_string(self).map_err(|e| LoreError::ConfigError(e.to_string()))
    }
}
