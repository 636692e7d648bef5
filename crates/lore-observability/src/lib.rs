//! # lore-observability
//!
//! Subscriber setup, span macros for recall and import, and structured
//! event helpers.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_from_config, init_tracing_with_filter};
