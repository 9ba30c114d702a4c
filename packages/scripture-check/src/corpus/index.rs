//! The corpus index - every verse plus its embedding, searchable by
//! exact nearest-neighbour distance.
//!
//! The index is built once at startup and never mutated afterwards, so a
//! single `Arc<CorpusIndex>` can be shared across concurrent requests with
//! no locking.
//!
//! # Degradation
//!
//! When no embeddings are available (empty corpus, keyword-only build, or
//! the embedder failing on a query) `search` answers with a keyword scan
//! instead. Callers see the same [`RetrievalResult`] shape either way; the
//! `mode` field records which path was taken.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{FactCheckError, Result};
use crate::traits::embedder::Embedder;
use crate::types::{
    retrieval::{RetrievalHit, RetrievalMode, RetrievalResult},
    verse::Verse,
};

/// In-memory scripture index.
///
/// Invariant: `vectors` is either empty or the same length as `verses`, and
/// `vectors[i]` always belongs to `verses[i]`.
pub struct CorpusIndex {
    verses: Vec<Verse>,
    vectors: Vec<Vec<f32>>,
    dimension: usize,
    embedder: Option<Arc<dyn Embedder>>,
}

impl std::fmt::Debug for CorpusIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusIndex")
            .field("verses", &self.verses.len())
            .field("dimension", &self.dimension)
            .field("embedder", &self.embedder.as_ref().map(|e| e.name().to_string()))
            .finish()
    }
}

impl CorpusIndex {
    /// Embed every verse in one batch and build the flat L2 index.
    ///
    /// An embedder failure here is returned to the caller; there is no
    /// recovery at build time.
    pub async fn build(verses: Vec<Verse>, embedder: Arc<dyn Embedder>) -> Result<Self> {
        if verses.is_empty() {
            warn!("Building corpus index with no verses; searches will use keyword fallback");
            return Ok(Self {
                verses,
                vectors: Vec::new(),
                dimension: 0,
                embedder: Some(embedder),
            });
        }

        let texts: Vec<&str> = verses.iter().map(|v| v.text.as_str()).collect();
        let vectors = embedder.embed_batch(&texts).await?;

        if vectors.len() != verses.len() {
            return Err(FactCheckError::Embedding(format!(
                "{} returned {} vectors for {} verses",
                embedder.name(),
                vectors.len(),
                verses.len()
            )));
        }

        let dimension = vectors[0].len();
        if dimension == 0 || vectors.iter().any(|v| v.len() != dimension) {
            return Err(FactCheckError::Embedding(format!(
                "{} returned vectors of inconsistent dimension",
                embedder.name()
            )));
        }

        info!(
            verses = verses.len(),
            dimension,
            embedder = embedder.name(),
            "Corpus index built"
        );

        Ok(Self {
            verses,
            vectors,
            dimension,
            embedder: Some(embedder),
        })
    }

    /// Build an index with no embeddings; every search is a keyword scan.
    pub fn keyword_only(verses: Vec<Verse>) -> Self {
        info!(verses = verses.len(), "Corpus index built in keyword-only mode");
        Self {
            verses,
            vectors: Vec::new(),
            dimension: 0,
            embedder: None,
        }
    }

    /// Number of verses held.
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// All verses in corpus order.
    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    /// Embedding dimension (0 without embeddings).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Whether vector search is available.
    pub fn has_embeddings(&self) -> bool {
        !self.vectors.is_empty() && self.embedder.is_some()
    }

    /// Retrieve up to `top_k` verses for a query.
    ///
    /// Vector mode returns the nearest verses by Euclidean distance, ties in
    /// corpus order. Keyword mode is used whenever embeddings are
    /// unavailable, including when the query itself fails to embed.
    pub async fn search(&self, query: &str, top_k: usize) -> Result<RetrievalResult> {
        let embedder = match &self.embedder {
            Some(embedder) if !self.vectors.is_empty() => embedder,
            _ => {
                debug!(query = %query, "No embeddings available, using keyword search");
                return Ok(self.keyword_search(query, top_k));
            }
        };

        let query_vector = match embedder.embed(query).await {
            Ok(v) => v,
            Err(e) => {
                warn!(
                    embedder = embedder.name(),
                    error = %e,
                    "Query embedding failed, falling back to keyword search"
                );
                return Ok(self.keyword_search(query, top_k));
            }
        };

        let hits = self.nearest(&query_vector, top_k)?;
        debug!(query = %query, hits = hits.len(), "Vector search complete");

        Ok(RetrievalResult {
            mode: RetrievalMode::Vector,
            hits,
        })
    }

    /// Case-insensitive substring scan in corpus order, capped at `top_k`.
    pub fn keyword_search(&self, query: &str, top_k: usize) -> RetrievalResult {
        let needle = query.to_lowercase();

        let hits = self
            .verses
            .iter()
            .filter(|v| v.text.to_lowercase().contains(&needle))
            .take(top_k)
            .cloned()
            .map(RetrievalHit::unscored)
            .collect();

        RetrievalResult {
            mode: RetrievalMode::Keyword,
            hits,
        }
    }

    /// Exact nearest neighbours of a query vector.
    pub fn nearest(&self, query: &[f32], top_k: usize) -> Result<Vec<RetrievalHit>> {
        if query.len() != self.dimension {
            return Err(FactCheckError::Index(format!(
                "query dimension {} does not match index dimension {}",
                query.len(),
                self.dimension
            )));
        }

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (i, l2_distance(query, v)))
            .collect();

        // Stable sort keeps corpus order among equal distances
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));

        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(i, distance)| RetrievalHit::scored(self.verses[i].clone(), distance))
            .collect())
    }
}

/// Euclidean distance between two vectors of equal length.
pub fn l2_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockEmbedder;
    use crate::types::verse::Locator;

    fn verse(n: u32, text: &str) -> Verse {
        Verse::new("test_work", Locator::chapter_verse(1, n), text)
    }

    fn corpus() -> Vec<Verse> {
        vec![
            verse(1, "In the beginning"),
            verse(2, "Blessed are the peacemakers"),
            verse(3, "You have the right to work"),
        ]
    }

    fn embedder() -> Arc<MockEmbedder> {
        Arc::new(
            MockEmbedder::new(2)
                .with_embedding("In the beginning", vec![0.0, 0.0])
                .with_embedding("Blessed are the peacemakers", vec![1.0, 0.0])
                .with_embedding("You have the right to work", vec![5.0, 5.0])
                .with_embedding("work", vec![4.0, 5.0])
                .with_embedding("peace", vec![1.0, 0.1]),
        )
    }

    #[test]
    fn test_l2_distance() {
        assert_eq!(l2_distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(l2_distance(&[1.0], &[1.0]), 0.0);
    }

    #[tokio::test]
    async fn test_build_keeps_vectors_aligned() {
        let index = CorpusIndex::build(corpus(), embedder()).await.unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.dimension(), 2);
        assert!(index.has_embeddings());
    }

    #[tokio::test]
    async fn test_search_orders_by_distance() {
        let index = CorpusIndex::build(corpus(), embedder()).await.unwrap();

        let result = index.search("work", 5).await.unwrap();
        assert_eq!(result.mode, RetrievalMode::Vector);
        assert_eq!(result.len(), 3);
        assert_eq!(result.hits[0].verse.text, "You have the right to work");

        let distances: Vec<f32> = result.hits.iter().map(|h| h.distance.unwrap()).collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn test_search_respects_top_k() {
        let index = CorpusIndex::build(corpus(), embedder()).await.unwrap();
        let result = index.search("peace", 1).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.hits[0].verse.text, "Blessed are the peacemakers");
    }

    #[tokio::test]
    async fn test_ties_break_by_corpus_order() {
        let embedder = Arc::new(
            MockEmbedder::new(1)
                .with_embedding("a", vec![1.0])
                .with_embedding("b", vec![1.0])
                .with_embedding("q", vec![0.0]),
        );
        let verses = vec![verse(1, "a"), verse(2, "b")];
        let index = CorpusIndex::build(verses, embedder).await.unwrap();

        let result = index.search("q", 2).await.unwrap();
        assert_eq!(result.hits[0].verse.text, "a");
        assert_eq!(result.hits[1].verse.text, "b");
    }

    #[tokio::test]
    async fn test_empty_corpus_uses_keyword_mode() {
        let index = CorpusIndex::build(vec![], embedder()).await.unwrap();
        let result = index.search("anything", 5).await.unwrap();
        assert_eq!(result.mode, RetrievalMode::Keyword);
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_keyword_only_is_case_insensitive() {
        let index = CorpusIndex::keyword_only(corpus());
        let result = index.search("THE RIGHT", 5).await.unwrap();
        assert_eq!(result.mode, RetrievalMode::Keyword);
        assert_eq!(result.len(), 1);
        assert!(result.hits[0].distance.is_none());
    }

    #[tokio::test]
    async fn test_keyword_caps_at_top_k_in_corpus_order() {
        let index = CorpusIndex::keyword_only(corpus());
        let result = index.search("the", 2).await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.hits[0].verse.text, "In the beginning");
        assert_eq!(result.hits[1].verse.text, "Blessed are the peacemakers");
    }

    #[tokio::test]
    async fn test_query_embedding_failure_degrades_to_keyword() {
        let embedder = Arc::new(
            MockEmbedder::new(2)
                .with_embedding("In the beginning", vec![0.0, 0.0])
                .with_embedding("Blessed are the peacemakers", vec![1.0, 0.0])
                .with_embedding("You have the right to work", vec![5.0, 5.0]),
        );
        let index = CorpusIndex::build(corpus(), embedder.clone()).await.unwrap();

        embedder.fail_next();
        let result = index.search("peacemakers", 5).await.unwrap();
        assert_eq!(result.mode, RetrievalMode::Keyword);
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn test_build_fails_when_embedder_fails() {
        let embedder = Arc::new(MockEmbedder::new(2));
        embedder.fail_next();
        assert!(CorpusIndex::build(corpus(), embedder).await.is_err());
    }

    #[test]
    fn test_dimension_mismatch_is_error() {
        let index = CorpusIndex {
            verses: corpus(),
            vectors: vec![vec![0.0, 0.0]; 3],
            dimension: 2,
            embedder: None,
        };
        assert!(matches!(
            index.nearest(&[0.0, 0.0, 0.0], 1),
            Err(FactCheckError::Index(_))
        ));
    }
}
