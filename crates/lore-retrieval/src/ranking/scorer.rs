//! Heuristic confidence scorer.
//!
//! Deterministic: the same record, query and project context always give
//! the same score, bit for bit.

use globset::GlobBuilder;

use lore_core::memory::{KnowledgeLevel, KnowledgeSource, MemoryRecord};

const BASE_SCORE: f64 = 0.5;
const TITLE_MATCH_SCORE: f64 = 1.0;
const CONTENT_MATCH_SCORE: f64 = 0.9;
const PROJECT_MATCH_BONUS: f64 = 0.3;
const LANGUAGE_LEVEL_BONUS: f64 = 0.2;
const MANUAL_SOURCE_BONUS: f64 = 0.1;
const FREQUENT_ACCESS_BONUS: f64 = 0.05;
/// Access count strictly above which the frequency bonus applies.
const FREQUENT_ACCESS_THRESHOLD: u64 = 10;

/// Score one candidate in [0, 1].
pub fn score(record: &MemoryRecord, query: &str, project_context: Option<&str>) -> f64 {
    let query_lower = query.to_lowercase();

    let mut base = if record.title.to_lowercase().contains(&query_lower) {
        TITLE_MATCH_SCORE
    } else if record.content.to_lowercase().contains(&query_lower) {
        CONTENT_MATCH_SCORE
    } else {
        BASE_SCORE
    };

    if record.level == KnowledgeLevel::Project {
        if let Some(ctx) = project_context.filter(|c| !c.is_empty()) {
            let pattern = record.project_path_pattern.as_deref().unwrap_or("");
            if glob_matches(ctx, pattern) {
                base += PROJECT_MATCH_BONUS;
            }
        }
    }
    if record.level == KnowledgeLevel::Language {
        base += LANGUAGE_LEVEL_BONUS;
    }
    if record.source == KnowledgeSource::Manual {
        base += MANUAL_SOURCE_BONUS;
    }
    if record.access_count > FREQUENT_ACCESS_THRESHOLD {
        base += FREQUENT_ACCESS_BONUS;
    }

    base.min(1.0)
}

/// Shell-style path match: `*` and `?` stay within one path segment.
/// An empty or malformed pattern matches nothing.
pub fn glob_matches(path: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    match GlobBuilder::new(pattern).literal_separator(true).build() {
        Ok(glob) => glob.compile_matcher().is_match(path),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::glob_matches;

    #[test]
    fn glob_stays_within_segments() {
        assert!(glob_matches("/work/shop", "/work/*"));
        assert!(!glob_matches("/work/shop/api", "/work/*"));
        assert!(glob_matches("/work/shop/api", "/work/*/api"));
        assert!(glob_matches("/work/a", "/work/?"));
    }

    #[test]
    fn empty_or_invalid_pattern_never_matches() {
        assert!(!glob_matches("/work/shop", ""));
        assert!(!glob_matches("/work/shop", "/work/[shop"));
    }
}
