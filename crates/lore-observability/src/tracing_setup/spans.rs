//! Span definitions per operation: recall, import preview, import confirm.

/// Create a recall span.
#[macro_export]
macro_rules! recall_span {
    ($query:expr, $level:expr) => {
        tracing::info_span!("lore.recall", query = %$query, level = ?$level)
    };
}

/// Create an import preview span.
#[macro_export]
macro_rules! import_preview_span {
    ($package_name:expr, $memory_count:expr) => {
        tracing::info_span!(
            "lore.import.preview",
            package = %$package_name,
            memory_count = $memory_count
        )
    };
}

/// Create an import confirm span.
#[macro_export]
macro_rules! import_confirm_span {
    ($import_id:expr) => {
        tracing::info_span!("lore.import.confirm", import_id = %$import_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RECALL: &str = "lore.recall";
    pub const IMPORT_PREVIEW: &str = "lore.import.preview";
    pub const IMPORT_CONFIRM: &str = "lore.import.confirm";
}
