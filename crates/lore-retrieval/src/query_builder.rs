//! Free text → full-text expression.

/// Collapse whitespace runs between tokens to single spaces, which the
/// search engine reads as a conjunction. Zero or one token passes through
/// untouched.
pub fn build(raw: &str) -> String {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() <= 1 {
        return raw.to_string();
    }
    tokens.join(" ")
}
