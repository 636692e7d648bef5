use lore_core::config::RecallConfig;
use lore_core::memory::KnowledgeLevel;
use lore_core::LoreError;
use lore_retrieval::{ScopeResolver, SearchStrategy};
use serde::Deserialize;
use test_fixtures::load_fixture;

#[derive(Deserialize)]
struct ScopeCases {
    cases: Vec<ScopeCase>,
}

#[derive(Deserialize)]
struct ScopeCase {
    query: String,
    project_context: Option<String>,
    level: Option<String>,
    expected_strategy: String,
}

#[test]
fn scope_cases_resolve_to_expected_strategy() {
    let fixture: ScopeCases = load_fixture("recall/scope_cases.json");
    let resolver = ScopeResolver::default();

    for case in &fixture.cases {
        let decision = resolver
            .resolve(
                &case.query,
                case.level.as_deref(),
                case.project_context.as_deref(),
            )
            .unwrap();
        assert_eq!(
            decision.strategy.to_string(),
            case.expected_strategy,
            "query {:?} with context {:?}",
            case.query,
            case.project_context
        );
        assert_eq!(decision.strategy.level(), decision.level);
    }
}

#[test]
fn explicit_level_must_be_valid() {
    let resolver = ScopeResolver::default();
    let err = resolver.resolve("router", Some("global"), None).unwrap_err();
    assert!(matches!(err, LoreError::ValidationError(_)));
}

#[test]
fn empty_explicit_level_falls_back_to_rules() {
    let resolver = ScopeResolver::default();
    let decision = resolver.resolve("语法", Some(""), None).unwrap();
    assert_eq!(
        decision.strategy,
        SearchStrategy::AutoDetermined(KnowledgeLevel::Language)
    );
}

#[test]
fn empty_project_context_does_not_enable_project_rule() {
    let resolver = ScopeResolver::default();
    let decision = resolver.resolve("我们的配置文件", None, Some("")).unwrap();
    assert_eq!(decision.level, KnowledgeLevel::Library);
}

#[test]
fn keyword_matching_is_case_insensitive() {
    let config = RecallConfig {
        language_keywords: vec!["Syntax".into()],
        project_keywords: vec!["OUR REPO".into()],
        ..RecallConfig::default()
    };
    let resolver = ScopeResolver::from_config(&config);

    let decision = resolver.resolve("closure SYNTAX", None, None).unwrap();
    assert_eq!(decision.level, KnowledgeLevel::Language);

    let decision = resolver
        .resolve("layout of our repo", None, Some("/work/shop"))
        .unwrap();
    assert_eq!(decision.level, KnowledgeLevel::Project);
}

#[test]
fn overriding_one_list_keeps_the_other_default() {
    let config = RecallConfig {
        language_keywords: vec!["syntax".into()],
        ..RecallConfig::default()
    };
    let resolver = ScopeResolver::from_config(&config);

    // Built-in language keyword no longer applies.
    let decision = resolver.resolve("如何定义接口", None, None).unwrap();
    assert_eq!(decision.level, KnowledgeLevel::Library);

    // Built-in project keyword still does.
    let decision = resolver.resolve("我项目", None, Some("/work/shop")).unwrap();
    assert_eq!(decision.level, KnowledgeLevel::Project);
}

#[test]
fn project_rule_is_checked_before_language_rule() {
    let resolver = ScopeResolver::default();
    // Contains both a project keyword and a language keyword.
    let decision = resolver
        .resolve("我们项目的函数定义", None, Some("/work/shop"))
        .unwrap();
    assert_eq!(decision.level, KnowledgeLevel::Project);
}
