//! Error taxonomy shared by every Lore crate.

mod storage_error;

pub use storage_error::StorageError;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum LoreError {
    #[error("validation failed: {0}")]
    ValidationError(String),

    #[error("memory not found: id={id}")]
    MemoryNotFound { id: i64 },

    #[error("import preview expired or unknown: {import_id}; run the preview again")]
    PreviewExpiredOrUnknown { import_id: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}

impl LoreError {
    /// Shorthand for building a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Whether the caller may retry the same call unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StorageError(_) | Self::ConcurrencyError(_))
    }
}

pub type LoreResult<T> = Result<T, LoreError>;
