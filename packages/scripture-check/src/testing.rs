//! Testing utilities including mock implementations.
//!
//! These are useful for exercising the fact-check pipeline without making
//! real AI or network calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::{FactCheckError, ProviderError, ProviderResult, Result};
use crate::traits::{
    embedder::Embedder,
    provider::{Completion, VerdictProvider},
    store::FactCheckStore,
};
use crate::types::{
    record::{FactCheckRecord, StoredFactCheck},
    verdict::{ClaimType, Verdict},
};

/// A mock embedder for testing.
///
/// Returns predefined vectors for known texts and a deterministic
/// hash-derived vector for anything else.
#[derive(Default)]
pub struct MockEmbedder {
    /// Predefined embeddings by text
    embeddings: Arc<RwLock<HashMap<String, Vec<f32>>>>,

    /// Default embedding dimension
    embedding_dim: usize,

    /// Fail the next call once
    fail_next: AtomicBool,

    /// Number of embed_batch calls
    calls: AtomicUsize,
}

impl MockEmbedder {
    /// Create a mock producing vectors of the given dimension.
    pub fn new(embedding_dim: usize) -> Self {
        Self {
            embedding_dim,
            ..Default::default()
        }
    }

    /// Add a predefined embedding for text.
    pub fn with_embedding(self, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        self.embeddings
            .write()
            .unwrap()
            .insert(text.into(), embedding);
        self
    }

    /// Make the next call fail with an embedding error.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Number of batch calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Generate a deterministic embedding based on text.
    fn generate_deterministic_embedding(&self, text: &str) -> Vec<f32> {
        use sha2::{Digest, Sha256};

        let hash = Sha256::digest(text.as_bytes());

        (0..self.embedding_dim)
            .map(|i| {
                let byte = hash[i % 32] as f32;
                (byte / 127.5) - 1.0
            })
            .collect()
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(FactCheckError::Embedding("mock embedder failure".into()));
        }

        let embeddings = self.embeddings.read().unwrap();
        Ok(texts
            .iter()
            .map(|text| {
                embeddings
                    .get(*text)
                    .cloned()
                    .unwrap_or_else(|| self.generate_deterministic_embedding(text))
            })
            .collect())
    }
}

/// A mock completion backend answering every prompt the same way.
pub struct MockCompletion {
    outcome: ProviderResult<String>,
    prompts: RwLock<Vec<String>>,
}

impl MockCompletion {
    /// Always answer with `text`.
    pub fn answering(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
            prompts: RwLock::new(Vec::new()),
        }
    }

    /// Always fail with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            outcome: Err(error),
            prompts: RwLock::new(Vec::new()),
        }
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }
}

#[async_trait]
impl Completion for MockCompletion {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, prompt: &str, _max_tokens: u32) -> ProviderResult<String> {
        self.prompts.write().unwrap().push(prompt.to_string());
        self.outcome.clone()
    }
}

#[derive(Debug, Clone)]
enum ProviderBehavior {
    Succeed(Verdict),
    Fail(ProviderError),
    Panic,
}

/// Record of a call made to a mock provider.
#[derive(Debug, Clone, PartialEq)]
pub struct MockProviderCall {
    pub claim: String,
    pub claim_type: ClaimType,
    pub language: String,
}

/// A mock verdict provider.
///
/// Clones share call history, so a test can hand one clone to the
/// orchestrator and keep another for assertions.
#[derive(Debug, Clone)]
pub struct MockProvider {
    name: String,
    behavior: ProviderBehavior,
    calls: Arc<RwLock<Vec<MockProviderCall>>>,
}

impl MockProvider {
    fn with_behavior(behavior: ProviderBehavior) -> Self {
        Self {
            name: "mock".to_string(),
            behavior,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Always return `verdict`.
    pub fn succeeding(verdict: Verdict) -> Self {
        Self::with_behavior(ProviderBehavior::Succeed(verdict))
    }

    /// Always fail with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self::with_behavior(ProviderBehavior::Fail(error))
    }

    /// Panic on every call.
    pub fn panicking() -> Self {
        Self::with_behavior(ProviderBehavior::Panic)
    }

    /// Set the name reported in logs.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockProviderCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl VerdictProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn produce(
        &self,
        claim: &str,
        claim_type: ClaimType,
        language: &str,
    ) -> ProviderResult<Verdict> {
        self.calls.write().unwrap().push(MockProviderCall {
            claim: claim.to_string(),
            claim_type,
            language: language.to_string(),
        });

        match &self.behavior {
            ProviderBehavior::Succeed(verdict) => Ok(verdict.clone()),
            ProviderBehavior::Fail(error) => Err(error.clone()),
            ProviderBehavior::Panic => panic!("mock provider panicked"),
        }
    }
}

/// A store whose every operation fails.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl FactCheckStore for FailingStore {
    async fn append(&self, _record: &FactCheckRecord) -> Result<i64> {
        Err(FactCheckError::Storage("disk full".into()))
    }

    async fn recent(&self, _limit: usize) -> Result<Vec<StoredFactCheck>> {
        Err(FactCheckError::Storage("disk full".into()))
    }

    async fn get(&self, _id: i64) -> Result<Option<StoredFactCheck>> {
        Err(FactCheckError::Storage("disk full".into()))
    }
}
