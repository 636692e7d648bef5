//! Bounded excerpt of content around the first query match.
//!
//! Lengths and offsets count Unicode scalar values, so a window never
//! splits a character.

use lore_core::config::defaults::{DEFAULT_SNIPPET_CONTEXT, DEFAULT_SNIPPET_MAX_LEN};
use lore_core::constants::ELLIPSIS;

#[derive(Debug, Clone, Copy)]
pub struct SnippetExtractor {
    /// Content at or under this many characters is returned whole.
    pub max_len: usize,
    /// Characters kept on each side of the match.
    pub context: usize,
}

impl Default for SnippetExtractor {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_SNIPPET_MAX_LEN,
            context: DEFAULT_SNIPPET_CONTEXT,
        }
    }
}

impl SnippetExtractor {
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            ..Self::default()
        }
    }

    pub fn extract(&self, content: &str, query: &str) -> String {
        let chars: Vec<char> = content.chars().collect();
        let len = chars.len();
        if len <= self.max_len {
            return content.to_string();
        }

        let haystack: Vec<char> = chars.iter().map(|&c| fold_case(c)).collect();
        let needle: Vec<char> = query.chars().map(fold_case).collect();

        let Some(pos) = find(&haystack, &needle) else {
            let mut head: String = chars[..self.max_len].iter().collect();
            head.push_str(ELLIPSIS);
            return head;
        };

        let start = pos.saturating_sub(self.context);
        let end = (pos + needle.len() + self.context).min(len);

        let mut out = String::new();
        if start > 0 {
            out.push_str(ELLIPSIS);
        }
        out.extend(&chars[start..end]);
        if end < len {
            out.push_str(ELLIPSIS);
        }
        out
    }
}

/// Lower-case a character when that keeps it a single character, so
/// offsets in the folded text line up with the original.
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn find(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
