use lore_core::config::ObservabilityConfig;
use lore_observability::{events, init_tracing_from_config, init_tracing_with_filter};

#[test]
fn second_install_reports_false() {
    // Whichever call runs first installs the global subscriber.
    let first = init_tracing_with_filter("debug");
    let second = init_tracing_from_config(&ObservabilityConfig::default());
    assert!(!(first && second));
}

#[test]
fn events_and_spans_emit_without_subscriber_errors() {
    events::memory_stored(1, "library", "manual");
    events::memory_deleted(1);
    events::recall_completed("auto_determined_library", 4, 2);
    events::import_previewed("id", 3, 2, 1);
    events::import_confirmed("id", 2, 1);
    events::previews_swept(0, 0);

    let span = lore_observability::recall_span!("router", "library");
    let _guard = span.enter();
    let span = lore_observability::import_confirm_span!("id");
    let _guard = span.enter();
    assert_eq!(
        lore_observability::tracing_setup::spans::names::RECALL,
        "lore.recall"
    );
}
