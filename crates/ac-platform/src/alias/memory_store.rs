//! In-Memory Alias Store
//!
//! `AliasStore` backed by a mutex-guarded map. Used by the test suite and
//! for local development without a database. Each operation takes the lock
//! once, so the insert and deactivate contracts hold under concurrency.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::alias::entity::AliasRecord;
use crate::alias::store::AliasStore;
use crate::shared::error::{PlatformError, Result};

#[derive(Default)]
pub struct InMemoryAliasStore {
    records: Mutex<HashMap<String, AliasRecord>>,
}

impl InMemoryAliasStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records (active and revoked).
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

#[async_trait]
impl AliasStore for InMemoryAliasStore {
    async fn insert(&self, record: &AliasRecord) -> Result<()> {
        let mut records = self.records.lock();
        match records.entry(record.alias.clone()) {
            Entry::Occupied(_) => Err(PlatformError::DuplicateAlias),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(())
            }
        }
    }

    async fn deactivate(&self, alias: &str, owner: &str) -> Result<u64> {
        let mut records = self.records.lock();
        match records.get_mut(alias) {
            Some(record) if record.owner == owner && record.active => {
                record.active = false;
                record.revoked_at = Some(Utc::now());
                Ok(1)
            }
            // Missing, foreign-owned, and already-revoked all collapse to 0.
            _ => Ok(0),
        }
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<AliasRecord>> {
        Ok(self.records.lock().get(alias).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn record(alias: &str, owner: &str) -> AliasRecord {
        AliasRecord::new(alias, owner, "test", "data:image/png;base64,x")
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate() {
        let store = InMemoryAliasStore::new();
        store.insert(&record("a1", "u1")).await.unwrap();

        let err = store.insert(&record("a1", "u2")).await.unwrap_err();
        assert!(matches!(err, PlatformError::DuplicateAlias));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_deactivate_requires_owner_and_active() {
        let store = InMemoryAliasStore::new();
        store.insert(&record("a1", "u1")).await.unwrap();

        assert_eq!(store.deactivate("a1", "someone-else").await.unwrap(), 0);
        assert_eq!(store.deactivate("missing", "u1").await.unwrap(), 0);
        assert_eq!(store.deactivate("a1", "u1").await.unwrap(), 1);
        assert_eq!(store.deactivate("a1", "u1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_revokes_yield_one_success() {
        let store = Arc::new(InMemoryAliasStore::new());
        store.insert(&record("a1", "u1")).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.deactivate("a1", "u1").await.unwrap()
            }));
        }

        let mut total = 0;
        for handle in handles {
            total += handle.await.unwrap();
        }
        assert_eq!(total, 1);

        let stored = store.find_by_alias("a1").await.unwrap().unwrap();
        assert!(!stored.active);
    }

    #[tokio::test]
    async fn test_find_is_public() {
        let store = InMemoryAliasStore::new();
        store.insert(&record("a1", "u1")).await.unwrap();

        // No owner filter on lookup
        let found = store.find_by_alias("a1").await.unwrap().unwrap();
        assert_eq!(found.owner, "u1");

        assert!(store.find_by_alias("a2").await.unwrap().is_none());
    }
}
