//! File-backed engine: read pool and writer under load.

use std::sync::Arc;

use lore_core::memory::{KnowledgeLevel, MemoryDraft};
use lore_core::models::TextQuery;
use lore_core::traits::IKnowledgeStorage;
use lore_storage::StorageEngine;

fn make_draft(i: usize) -> MemoryDraft {
    MemoryDraft::new(
        KnowledgeLevel::Library,
        format!("router note {i}"),
        "router handlers run in order",
    )
    .with_collection("tang")
}

#[test]
fn concurrent_increments_are_not_lost() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(StorageEngine::open(&dir.path().join("lore.db")).unwrap());
    let id = engine.insert(&make_draft(0)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                for _ in 0..25 {
                    engine.increment_access(id).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(engine.get(id).unwrap().access_count, 100);
}

#[test]
fn reads_during_writes_see_committed_rows() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(StorageEngine::open(&dir.path().join("lore.db")).unwrap());
    for i in 0..10 {
        engine.insert(&make_draft(i)).unwrap();
    }

    let writer = {
        let engine = Arc::clone(&engine);
        std::thread::spawn(move || {
            for i in 10..30 {
                engine.insert(&make_draft(i)).unwrap();
            }
        })
    };
    let readers: Vec<_> = (0..3)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                for _ in 0..10 {
                    let hits = engine
                        .text_query(&TextQuery {
                            expression: "router".into(),
                            level: KnowledgeLevel::Library,
                            language_tag: "cangjie".into(),
                            collection_name: None,
                            project_context: None,
                            fts_cap: 100,
                            limit: 100,
                        })
                        .unwrap();
                    assert!(hits.len() >= 10);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
}

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lore.db");
    let id = {
        let engine = StorageEngine::open(&path).unwrap();
        engine.insert(&make_draft(1)).unwrap()
    };
    let engine = StorageEngine::open(&path).unwrap();
    assert_eq!(engine.get(id).unwrap().title, "router note 1");
    assert!(engine.pool().readers.size() >= 1);
}

#[test]
fn file_backed_engine_runs_in_wal_mode() {
    let dir = tempfile::tempdir().unwrap();
    let engine = StorageEngine::open(&dir.path().join("lore.db")).unwrap();
    assert!(engine.is_wal().unwrap());

    let memory = StorageEngine::open_in_memory().unwrap();
    assert!(!memory.is_wal().unwrap());
}
