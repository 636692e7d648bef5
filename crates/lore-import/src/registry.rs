//! PreviewRegistry: pending import previews keyed by import id.

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use lore_core::memory::MemoryDraft;

/// Drafts parked between preview and confirm.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    pub drafts: Vec<MemoryDraft>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl PreviewEntry {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Thread-safe preview store using `DashMap`. Every operation that reads
/// and then modifies an entry does so under the entry's shard lock.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    entries: DashMap<String, PreviewEntry>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, import_id: String, entry: PreviewEntry) {
        self.entries.insert(import_id, entry);
    }

    /// Remove and return a live entry. An expired entry is removed too but
    /// reported as absent.
    pub fn take(&self, import_id: &str, now: DateTime<Utc>) -> Option<PreviewEntry> {
        let (_, entry) = self.entries.remove(import_id)?;
        if entry.is_expired(now) {
            None
        } else {
            Some(entry)
        }
    }

    /// Put an entry back after a failed confirm. Keeps its original expiry.
    pub fn restore(&self, import_id: String, entry: PreviewEntry) {
        self.entries.entry(import_id).or_insert(entry);
    }

    /// Drop every entry expired at `now`. Returns how many were removed.
    pub fn sweep(&self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.entries.len())
    }

    pub fn contains(&self, import_id: &str) -> bool {
        self.entries.contains_key(import_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use lore_core::memory::KnowledgeLevel;

    fn entry(now: DateTime<Utc>, ttl_secs: i64) -> PreviewEntry {
        PreviewEntry {
            drafts: vec![MemoryDraft::new(KnowledgeLevel::Language, "t", "c")],
            created_at: now,
            expires_at: now + Duration::seconds(ttl_secs),
        }
    }

    #[test]
    fn take_is_single_use() {
        let registry = PreviewRegistry::new();
        let now = Utc::now();
        registry.insert("a".into(), entry(now, 60));

        assert!(registry.take("a", now).is_some());
        assert!(registry.take("a", now).is_none());
    }

    #[test]
    fn expired_entry_is_removed_on_take() {
        let registry = PreviewRegistry::new();
        let now = Utc::now();
        registry.insert("a".into(), entry(now, 60));

        assert!(registry.take("a", now + Duration::seconds(61)).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn expiry_boundary_is_still_live() {
        let registry = PreviewRegistry::new();
        let now = Utc::now();
        registry.insert("a".into(), entry(now, 60));
        assert!(registry.take("a", now + Duration::seconds(60)).is_some());
    }

    #[test]
    fn sweep_keeps_live_entries() {
        let registry = PreviewRegistry::new();
        let now = Utc::now();
        registry.insert("old".into(), entry(now, 10));
        registry.insert("new".into(), entry(now, 100));

        assert_eq!(registry.sweep(now + Duration::seconds(50)), 1);
        assert!(registry.contains("new"));
        assert!(!registry.contains("old"));
    }
}
