use lore_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = LoreConfig::from_toml("").unwrap();

    // Storage defaults
    assert_eq!(config.storage.db_path, None);
    assert!(config.storage.wal_mode);
    assert_eq!(config.storage.busy_timeout_ms, 5_000);
    assert_eq!(config.storage.read_pool_size, 4);

    // Recall defaults
    assert_eq!(config.recall.default_max_results, 10);
    assert_eq!(config.recall.default_min_confidence, 0.5);
    assert_eq!(config.recall.candidate_multiplier, 2);
    assert_eq!(config.recall.fts_candidate_cap, 100);
    assert_eq!(config.recall.snippet_max_len, 100);
    assert!(config.recall.project_keywords.is_empty());
    assert!(config.recall.language_keywords.is_empty());

    // Import defaults
    assert_eq!(config.import.preview_ttl_secs, 1_800);
    assert_eq!(config.import.sweep_interval_secs, 300);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[storage]
db_path = "/var/lib/lore/knowledge.db"
read_pool_size = 8

[recall]
default_min_confidence = 0.75
language_keywords = ["syntax", "keyword"]

[import]
preview_ttl_secs = 60
"#;
    let config = LoreConfig::from_toml(toml).unwrap();

    assert_eq!(
        config.storage.db_path.as_deref(),
        Some("/var/lib/lore/knowledge.db")
    );
    assert_eq!(config.storage.read_pool_size, 8);
    // Untouched keys in a touched section keep defaults.
    assert!(config.storage.wal_mode);
    assert_eq!(config.storage.busy_timeout_ms, 5_000);

    assert_eq!(config.recall.default_min_confidence, 0.75);
    assert_eq!(config.recall.language_keywords, vec!["syntax", "keyword"]);
    assert_eq!(config.recall.default_max_results, 10);

    assert_eq!(config.import.preview_ttl_secs, 60);
    assert_eq!(config.import.sweep_interval_secs, 300);

    // Untouched sections keep defaults.
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_rejects_malformed_toml() {
    let err = LoreConfig::from_toml("[storage\ndb_path = 1").unwrap_err();
    assert!(matches!(err, lore_core::LoreError::ConfigError(_)));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = LoreConfig::default();
    config.recall.default_max_results = 25;
    config.import.sweep_interval_secs = 30;

    let text = config.to_toml().unwrap();
    let back = LoreConfig::from_toml(&text).unwrap();
    assert_eq!(back.recall.default_max_results, 25);
    assert_eq!(back.import.sweep_interval_secs, 30);
}
