//! # lore-runtime
//!
//! Single entry point for hosts: one [`KnowledgeRuntime`] per database.

pub mod runtime;

pub use runtime::{KnowledgeRuntime, RuntimeOptions};
