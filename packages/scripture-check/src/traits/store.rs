//! Persistence trait for finished fact checks.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::record::{FactCheckRecord, StoredFactCheck};

/// Append-only store of fact-check records.
///
/// Appends from concurrent requests must not interleave or corrupt each
/// other; no other cross-record consistency is required.
#[async_trait]
pub trait FactCheckStore: Send + Sync {
    /// Append a record, returning its identifier.
    async fn append(&self, record: &FactCheckRecord) -> Result<i64>;

    /// The most recent records, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<StoredFactCheck>>;

    /// A single record by identifier.
    async fn get(&self, id: i64) -> Result<Option<StoredFactCheck>>;
}
