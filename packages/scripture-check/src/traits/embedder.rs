//! Embedder trait for turning passages into vectors.

use async_trait::async_trait;

use crate::error::{FactCheckError, Result};

/// Text embedding model.
///
/// Implementations must be deterministic for a given model: the corpus is
/// embedded once at startup and every query is compared against those
/// vectors.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Embed many texts in one call.
    ///
    /// Returns one vector per input, in input order.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;

    /// Embed a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.embed_batch(&[text])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| FactCheckError::Embedding(format!("{} returned no vector", self.name())))
    }
}
