//! SQLite storage implementation.
//!
//! A file-based backend for fact-check history. Good for:
//! - Local development
//! - Single-server deployments
//! - Testing with persistent data

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;

use crate::error::{FactCheckError, Result};
use crate::traits::store::FactCheckStore;
use crate::types::record::{FactCheckRecord, StoredFactCheck};

/// SQLite-based fact-check store.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a new SQLite store with the given connection URL.
    ///
    /// # Example URLs
    /// - `sqlite::memory:` - In-memory database (ephemeral)
    /// - `sqlite://facts_checker.db` - File-based database
    /// - `sqlite://facts_checker.db?mode=rwc` - Create if not exists
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| FactCheckError::Storage(e.to_string().into()))?;

        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Create an in-memory SQLite store (for testing).
    ///
    /// Limited to one connection so every query sees the same database.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| FactCheckError::Storage(e.to_string().into()))?;

        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Run database migrations.
    async fn run_migrations(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS fact_checks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                claim TEXT NOT NULL,
                verdict TEXT NOT NULL,
                confidence INTEGER NOT NULL,
                rationale TEXT NOT NULL,
                citations TEXT NOT NULL DEFAULT '[]',
                record TEXT NOT NULL,
                timestamp TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_fact_checks_timestamp ON fact_checks(timestamp);
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| FactCheckError::Storage(e.to_string().into()))?;

        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// Row type for sqlx queries
#[derive(Debug, FromRow)]
struct FactCheckRow {
    id: i64,
    record: String,
}

impl FactCheckRow {
    fn into_stored(self) -> Result<StoredFactCheck> {
        let record: FactCheckRecord = serde_json::from_str(&self.record).map_err(|e| {
            FactCheckError::Storage(format!("Invalid record JSON for id {}: {}", self.id, e).into())
        })?;

        Ok(StoredFactCheck {
            id: self.id,
            record,
        })
    }
}

#[async_trait]
impl FactCheckStore for SqliteStore {
    async fn append(&self, record: &FactCheckRecord) -> Result<i64> {
        let citations = serde_json::to_string(&record.verdict.citations)?;
        let full = serde_json::to_string(record)?;

        let result = sqlx::query(
            r#"
            INSERT INTO fact_checks (claim, verdict, confidence, rationale, citations, record, timestamp)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.claim)
        .bind(record.verdict.verdict.as_str())
        .bind(record.verdict.confidence as i64)
        .bind(&record.verdict.rationale)
        .bind(&citations)
        .bind(&full)
        .bind(record.timestamp.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| FactCheckError::Storage(e.to_string().into()))?;

        Ok(result.last_insert_rowid())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<StoredFactCheck>> {
        let rows: Vec<FactCheckRow> = sqlx::query_as(
            "SELECT id, record FROM fact_checks ORDER BY timestamp DESC, id DESC LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FactCheckError::Storage(e.to_string().into()))?;

        rows.into_iter().map(|r| r.into_stored()).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<StoredFactCheck>> {
        let row: Option<FactCheckRow> =
            sqlx::query_as("SELECT id, record FROM fact_checks WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| FactCheckError::Storage(e.to_string().into()))?;

        row.map(|r| r.into_stored()).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::Claim;
    use crate::types::verdict::{Citation, ClaimType, Verdict, VerdictKind};

    fn record(text: &str) -> FactCheckRecord {
        let verdict = Verdict::new(VerdictKind::PartiallySupported, 65, "rationale")
            .with_citations(vec![Citation::new("Bhagavad Gita", "2:47", "You have the right")]);
        FactCheckRecord::new(verdict, &Claim::new(text), ClaimType::Textual, vec![])
    }

    #[tokio::test]
    async fn test_append_and_get_round_trip() {
        let store = SqliteStore::in_memory().await.unwrap();
        let original = record("Gita 2:47 claim");

        let id = store.append(&original).await.unwrap();
        let stored = store.get(id).await.unwrap().unwrap();

        assert_eq!(stored.id, id);
        assert_eq!(stored.record.claim, original.claim);
        assert_eq!(stored.record.verdict, original.verdict);
        assert_eq!(stored.record.timestamp, original.timestamp);
    }

    #[tokio::test]
    async fn test_recent_newest_first_with_limit() {
        let store = SqliteStore::in_memory().await.unwrap();
        for text in ["first", "second", "third"] {
            store.append(&record(text)).await.unwrap();
        }

        let recent = store.recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].record.claim, "third");
        assert_eq!(recent[1].record.claim, "second");
    }

    #[tokio::test]
    async fn test_missing_id_is_none() {
        let store = SqliteStore::in_memory().await.unwrap();
        assert!(store.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_backed_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("facts.db").display());

        let id = {
            let store = SqliteStore::new(&url).await.unwrap();
            store.append(&record("persisted")).await.unwrap()
        };

        let reopened = SqliteStore::new(&url).await.unwrap();
        assert_eq!(reopened.get(id).await.unwrap().unwrap().record.claim, "persisted");
    }
}
