//! # lore-core
//!
//! Foundation crate for the Lore knowledge memory.
//! Defines the record model, recall/import DTOs, the storage trait,
//! errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod memory;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LoreConfig;
pub use errors::{LoreError, LoreResult};
pub use memory::{Confidence, KnowledgeLevel, KnowledgeSource, MemoryDraft, MemoryId, MemoryRecord};
