//! Retrieval results from the corpus index.

use serde::{Deserialize, Serialize};

use super::verse::Verse;

/// One retrieved verse.
///
/// `distance` is the Euclidean distance to the query in vector mode and
/// `None` in keyword mode, where order is corpus order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalHit {
    pub verse: Verse,
    pub distance: Option<f32>,
}

impl RetrievalHit {
    pub fn scored(verse: Verse, distance: f32) -> Self {
        Self {
            verse,
            distance: Some(distance),
        }
    }

    pub fn unscored(verse: Verse) -> Self {
        Self {
            verse,
            distance: None,
        }
    }
}

/// How a retrieval was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalMode {
    /// Exact L2 nearest-neighbour search over embeddings
    Vector,
    /// Case-insensitive substring scan
    Keyword,
}

/// Ordered retrieval output, nearest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub mode: RetrievalMode,
    pub hits: Vec<RetrievalHit>,
}

impl RetrievalResult {
    pub fn empty(mode: RetrievalMode) -> Self {
        Self {
            mode,
            hits: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RetrievalHit> {
        self.hits.iter()
    }
}
