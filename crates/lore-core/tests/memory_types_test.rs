use lore_core::memory::*;
use lore_core::LoreError;
use proptest::prelude::*;

#[test]
fn level_parses_all_variants() {
    for level in KnowledgeLevel::ALL {
        let parsed: KnowledgeLevel = level.as_str().parse().unwrap();
        assert_eq!(parsed, level);
    }
}

#[test]
fn level_rejects_unknown_string() {
    let err = "global".parse::<KnowledgeLevel>().unwrap_err();
    assert!(matches!(err, LoreError::ValidationError(_)));
    assert!(err.to_string().contains("global"));
}

#[test]
fn level_serializes_snake_case() {
    let json = serde_json::to_string(&KnowledgeLevel::Library).unwrap();
    assert_eq!(json, "\"library\"");
}

#[test]
fn source_baseline_confidence() {
    assert_eq!(KnowledgeSource::Manual.baseline_confidence().value(), 1.0);
    assert_eq!(KnowledgeSource::AutoCaptured.baseline_confidence().value(), 0.7);
}

#[test]
fn source_round_trips_through_str() {
    assert_eq!("auto_captured".parse::<KnowledgeSource>().unwrap(), KnowledgeSource::AutoCaptured);
    assert_eq!(KnowledgeSource::AutoCaptured.to_string(), "auto_captured");
    assert!("robot".parse::<KnowledgeSource>().is_err());
}

#[test]
fn confidence_clamps_and_handles_nan() {
    assert_eq!(Confidence::new(1.7).value(), 1.0);
    assert_eq!(Confidence::new(-0.3).value(), 0.0);
    assert_eq!(Confidence::new(f64::NAN).value(), 0.0);
}

#[test]
fn draft_defaults_applied_by_normalized() {
    let draft = MemoryDraft::new(KnowledgeLevel::Library, "Router", "Use tang routers")
        .with_collection("tang")
        .with_summary("")
        .normalized();
    assert_eq!(draft.language_tag, "cangjie");
    assert_eq!(draft.source, Some(KnowledgeSource::Manual));
    assert_eq!(draft.summary, None);
    assert_eq!(draft.collection_key(), "tang");
}

#[test]
fn draft_validation_rules() {
    let ok = MemoryDraft::new(KnowledgeLevel::Language, "struct", "struct Point {}");
    assert!(ok.validate().is_ok());

    let no_title = MemoryDraft::new(KnowledgeLevel::Language, "  ", "body");
    assert!(no_title.validate().is_err());

    let no_content = MemoryDraft::new(KnowledgeLevel::Language, "title", "");
    assert!(no_content.validate().is_err());

    let project = MemoryDraft::new(KnowledgeLevel::Project, "layout", "src/ holds code");
    let err = project.validate().unwrap_err();
    assert!(err.to_string().contains("project_path_pattern"));

    let project = project.with_project_pattern("/work/app*");
    assert!(project.validate().is_ok());
}

#[test]
fn draft_deserializes_package_shape() {
    let json = r#"{
        "level": "library",
        "language_tag": "cangjie",
        "library_name": "tang",
        "project_path_pattern": "",
        "title": "Middleware",
        "content": "Register middleware before routes.",
        "summary": "",
        "source": ""
    }"#;
    let draft: MemoryDraft = serde_json::from_str(json).unwrap();
    assert_eq!(draft.collection_name.as_deref(), Some("tang"));
    assert_eq!(draft.source, None);
    assert_eq!(draft.effective_source(), KnowledgeSource::Manual);

    let draft = draft.normalized();
    assert_eq!(draft.project_path_pattern, None);
}

#[test]
fn draft_rejects_unknown_source() {
    let json = r#"{"level":"library","title":"t","content":"c","source":"robot"}"#;
    assert!(serde_json::from_str::<MemoryDraft>(json).is_err());
}

proptest! {
    #[test]
    fn confidence_always_in_unit_interval(v in proptest::num::f64::ANY) {
        let c = Confidence::new(v).value();
        prop_assert!((0.0..=1.0).contains(&c));
    }
}
