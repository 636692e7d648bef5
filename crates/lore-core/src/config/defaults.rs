// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Recall ---
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_CANDIDATE_MULTIPLIER: usize = 2;
pub const DEFAULT_FTS_CANDIDATE_CAP: usize = 100;
pub const DEFAULT_SNIPPET_MAX_LEN: usize = 100;
pub const DEFAULT_SNIPPET_CONTEXT: usize = 50;

// --- Listing ---
pub const DEFAULT_LIST_LIMIT: usize = 20;

// --- Import ---
pub const DEFAULT_PREVIEW_TTL_SECS: u64 = 1_800; // 30 minutes
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300; // 5 minutes

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;
