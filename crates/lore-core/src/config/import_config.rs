use serde::{Deserialize, Serialize};

use super::defaults;

/// Import preview configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Lifetime of an unconfirmed preview, in seconds.
    pub preview_ttl_secs: u64,
    /// Interval between expired-preview sweeps, in seconds.
    pub sweep_interval_secs: u64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            preview_ttl_secs: defaults::DEFAULT_PREVIEW_TTL_SECS,
            sweep_interval_secs: defaults::DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}
