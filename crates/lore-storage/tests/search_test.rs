use lore_core::memory::{KnowledgeLevel, MemoryDraft};
use lore_core::models::TextQuery;
use lore_core::traits::IKnowledgeStorage;
use lore_storage::queries::memory_search::fts_match_expression;
use lore_storage::StorageEngine;
use proptest::prelude::*;

fn text_query(expression: &str, level: KnowledgeLevel) -> TextQuery {
    TextQuery {
        expression: expression.to_string(),
        level,
        language_tag: "cangjie".to_string(),
        collection_name: None,
        project_context: None,
        fts_cap: 100,
        limit: 20,
    }
}

fn seeded() -> StorageEngine {
    let storage = StorageEngine::open_in_memory().unwrap();
    storage
        .insert(
            &MemoryDraft::new(KnowledgeLevel::Library, "Router basics", "Create a router per service")
                .with_collection("tang"),
        )
        .unwrap();
    storage
        .insert(
            &MemoryDraft::new(KnowledgeLevel::Library, "Http client", "The router is not needed here")
                .with_collection("fetch"),
        )
        .unwrap();
    storage
        .insert(&MemoryDraft::new(
            KnowledgeLevel::Language,
            "Struct definition",
            "A struct groups named fields",
        ))
        .unwrap();
    storage
        .insert(
            &MemoryDraft::new(KnowledgeLevel::Project, "Router config", "Routes live in router.cj")
                .with_project_pattern("/work/shop*"),
        )
        .unwrap();
    storage
}

#[test]
fn quoting_wraps_each_token() {
    assert_eq!(fts_match_expression("router new"), "\"router\" \"new\"");
    assert_eq!(fts_match_expression("say \"hi\""), "\"say\" \"\"\"hi\"\"\"");
    assert_eq!(fts_match_expression("   "), "");
}

#[test]
fn text_query_restricts_to_level() {
    let storage = seeded();
    let results = storage
        .text_query(&text_query("router", KnowledgeLevel::Library))
        .unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.level == KnowledgeLevel::Library));
}

#[test]
fn text_query_filters_by_collection() {
    let storage = seeded();
    let mut query = text_query("router", KnowledgeLevel::Library);
    query.collection_name = Some("tang".into());
    let results = storage.text_query(&query).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Router basics");
}

#[test]
fn text_query_matches_title_and_is_conjunctive() {
    let storage = seeded();
    let results = storage
        .text_query(&text_query("struct fields", KnowledgeLevel::Language))
        .unwrap();
    assert_eq!(results.len(), 1);

    let results = storage
        .text_query(&text_query("struct router", KnowledgeLevel::Language))
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn project_context_globs_against_stored_pattern() {
    let storage = seeded();
    let mut query = text_query("router", KnowledgeLevel::Project);

    query.project_context = Some("/work/shop-api".into());
    assert_eq!(storage.text_query(&query).unwrap().len(), 1);

    query.project_context = Some("/home/other".into());
    assert!(storage.text_query(&query).unwrap().is_empty());

    query.project_context = None;
    assert_eq!(storage.text_query(&query).unwrap().len(), 1);
}

#[test]
fn limit_caps_candidates() {
    let storage = seeded();
    let mut query = text_query("router", KnowledgeLevel::Library);
    query.limit = 1;
    assert_eq!(storage.text_query(&query).unwrap().len(), 1);
}

#[test]
fn deleted_records_leave_the_index() {
    let storage = seeded();
    let hits = storage
        .text_query(&text_query("struct", KnowledgeLevel::Language))
        .unwrap();
    storage.delete(hits[0].id).unwrap();
    assert!(storage
        .text_query(&text_query("struct", KnowledgeLevel::Language))
        .unwrap()
        .is_empty());
}

#[test]
fn updated_content_is_reindexed() {
    let storage = seeded();
    let hits = storage
        .text_query(&text_query("struct", KnowledgeLevel::Language))
        .unwrap();
    storage
        .update(
            hits[0].id,
            &MemoryDraft::new(KnowledgeLevel::Language, "Enum definition", "An enum lists variants"),
        )
        .unwrap();
    assert!(storage
        .text_query(&text_query("struct", KnowledgeLevel::Language))
        .unwrap()
        .is_empty());
    assert_eq!(
        storage
            .text_query(&text_query("variants", KnowledgeLevel::Language))
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn operator_characters_do_not_break_queries() {
    let storage = seeded();
    for raw in ["router AND", "NEAR(router", "\"", "*", "a:b", "-router", "(", "^x"] {
        assert!(
            storage
                .text_query(&text_query(raw, KnowledgeLevel::Library))
                .is_ok(),
            "query {raw:?} should not error"
        );
    }
}

proptest! {
    #[test]
    fn arbitrary_text_never_errors(raw in "\\PC{0,40}") {
        let storage = StorageEngine::open_in_memory().unwrap();
        prop_assert!(storage.text_query(&text_query(&raw, KnowledgeLevel::Library)).is_ok());
    }
}
