/// Lore version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language tag applied when a request leaves it empty.
pub const DEFAULT_LANGUAGE_TAG: &str = "cangjie";

/// Baseline confidence persisted for manually written memories.
pub const MANUAL_CONFIDENCE: f64 = 1.0;

/// Baseline confidence persisted for memories captured by an assistant.
pub const AUTO_CAPTURED_CONFIDENCE: f64 = 0.7;

/// Knowledge package format version written by export.
pub const PACKAGE_FORMAT_VERSION: &str = "1.0";

/// Package name written by export.
pub const EXPORT_PACKAGE_NAME: &str = "lore export";

/// Ellipsis marker used by snippet extraction.
pub const ELLIPSIS: &str = "...";
