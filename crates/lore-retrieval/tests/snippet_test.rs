use lore_retrieval::SnippetExtractor;

fn padded(prefix: usize, needle: &str, total: usize) -> String {
    let mut s = "a".repeat(prefix);
    s.push_str(needle);
    while s.chars().count() < total {
        s.push('b');
    }
    s
}

#[test]
fn short_content_is_returned_whole() {
    let extractor = SnippetExtractor::default();
    let content = "x".repeat(100);
    assert_eq!(extractor.extract(&content, "zzz"), content);
}

#[test]
fn match_near_start_has_only_trailing_ellipsis() {
    let extractor = SnippetExtractor::default();
    let query = "router";
    let content = padded(10, query, 200);

    let snippet = extractor.extract(&content, query);
    let expected: String = content.chars().take(10 + query.len() + 50).collect();
    assert_eq!(snippet, format!("{expected}..."));
}

#[test]
fn match_in_middle_has_both_ellipses() {
    let extractor = SnippetExtractor::default();
    let content = padded(100, "needle", 300);

    let snippet = extractor.extract(&content, "NEEDLE");
    assert!(snippet.starts_with("..."));
    assert!(snippet.ends_with("..."));
    let body = &snippet[3..snippet.len() - 3];
    assert_eq!(body.chars().count(), 50 + 6 + 50);
    assert!(body.contains("needle"));
}

#[test]
fn match_near_end_has_only_leading_ellipsis() {
    let extractor = SnippetExtractor::default();
    let mut content = "a".repeat(190);
    content.push_str("tail");

    let snippet = extractor.extract(&content, "tail");
    assert!(snippet.starts_with("..."));
    assert!(!snippet.ends_with("..."));
    assert!(snippet.ends_with("tail"));
}

#[test]
fn no_match_returns_head_with_ellipsis() {
    let extractor = SnippetExtractor::default();
    let content = "c".repeat(150);
    let snippet = extractor.extract(&content, "zzz");
    assert_eq!(snippet, format!("{}...", "c".repeat(100)));
}

#[test]
fn multibyte_content_is_cut_on_character_boundaries() {
    let extractor = SnippetExtractor::default();
    let content = format!("{}接口定义{}", "仓".repeat(120), "颉".repeat(120));

    let snippet = extractor.extract(&content, "接口");
    assert!(snippet.contains("接口定义"));
    let body = snippet.trim_start_matches("...").trim_end_matches("...");
    assert_eq!(body.chars().count(), 50 + 2 + 50);
}

#[test]
fn custom_max_len_is_honoured() {
    let extractor = SnippetExtractor::new(10);
    assert_eq!(extractor.extract("0123456789", "x"), "0123456789");
    assert_eq!(extractor.extract("0123456789ab", "x"), "0123456789...");
}
