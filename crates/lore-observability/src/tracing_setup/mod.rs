//! Tracing setup: structured logging with span definitions and event helpers.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

use lore_core::config::ObservabilityConfig;

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "LORE_LOG";

/// Install a JSON subscriber honouring `LORE_LOG`, default `info`.
///
/// Returns false when a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}

/// Install a JSON subscriber with an explicit filter string.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}

/// Install a subscriber from configuration. `LORE_LOG` still wins over
/// `config.log_level` when set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
