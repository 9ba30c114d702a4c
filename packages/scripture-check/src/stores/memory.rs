//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::Result;
use crate::traits::store::FactCheckStore;
use crate::types::record::{FactCheckRecord, StoredFactCheck};

/// In-memory fact-check history.
///
/// Not suitable for production as data is lost on restart. Identifiers
/// start at 1 and increase with each append.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<StoredFactCheck>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.records.write().unwrap().clear();
    }
}

#[async_trait]
impl FactCheckStore for MemoryStore {
    async fn append(&self, record: &FactCheckRecord) -> Result<i64> {
        let mut records = self.records.write().unwrap();
        let id = records.last().map(|r| r.id + 1).unwrap_or(1);
        records.push(StoredFactCheck {
            id,
            record: record.clone(),
        });
        Ok(id)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<StoredFactCheck>> {
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<StoredFactCheck>> {
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::Claim;
    use crate::types::verdict::{ClaimType, Verdict, VerdictKind};

    fn record(text: &str) -> FactCheckRecord {
        FactCheckRecord::new(
            Verdict::new(VerdictKind::Unclear, 30, "r"),
            &Claim::new(text),
            ClaimType::Mixed,
            vec![],
        )
    }

    #[tokio::test]
    async fn test_append_assigns_increasing_ids() {
        let store = MemoryStore::new();
        assert_eq!(store.append(&record("a")).await.unwrap(), 1);
        assert_eq!(store.append(&record("b")).await.unwrap(), 2);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_recent_is_newest_first() {
        let store = MemoryStore::new();
        for text in ["a", "b", "c"] {
            store.append(&record(text)).await.unwrap();
        }

        let recent = store.recent(2).await.unwrap();
        let claims: Vec<_> = recent.iter().map(|r| r.record.claim.as_str()).collect();
        assert_eq!(claims, vec!["c", "b"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = MemoryStore::new();
        let id = store.append(&record("a")).await.unwrap();

        assert_eq!(store.get(id).await.unwrap().unwrap().record.claim, "a");
        assert!(store.get(99).await.unwrap().is_none());
    }
}
