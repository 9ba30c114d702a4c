//! Scripture Claim Fact-Checking Library
//!
//! Answers natural-language claims about religious texts with a structured
//! verdict: supported, contradicted, partially supported, unclear or
//! theological, plus confidence, rationale and citations.
//!
//! # Pipeline
//!
//! classify → extract references → retrieve passages → try providers in
//! order → fall back to local synthesis → attach metadata → persist.
//!
//! Every call returns a complete record. Remote providers are unreliable by
//! assumption; the corpus index is read-only after startup and shared
//! across requests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use scripture_check::{Claim, CorpusIndex, FactChecker, HashingEmbedder, MemoryStore};
//! use scripture_check::corpus::sample_verses;
//!
//! let index = CorpusIndex::build(sample_verses(), Arc::new(HashingEmbedder::default())).await?;
//!
//! // No providers: offline mode, local synthesis answers
//! let checker = FactChecker::builder(Arc::new(index))
//!     .store(Arc::new(MemoryStore::new()))
//!     .build();
//!
//! let record = checker.check(&Claim::new("Gita 2:47 says outcomes don't matter")).await;
//! println!("{} ({}%)", record.verdict.verdict, record.verdict.confidence);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Embedder, VerdictProvider, ClaimClassifier, FactCheckStore)
//! - [`types`] - Verses, references, verdicts and records
//! - [`corpus`] - Corpus loading and the searchable index
//! - [`pipeline`] - Classification, extraction, synthesis and the orchestrator
//! - [`providers`] - Remote verdict providers (OpenAI, Gemini)
//! - [`embedders`] - Embedding implementations
//! - [`stores`] - Storage implementations (MemoryStore, SqliteStore)
//! - [`security`] - API key handling
//! - [`testing`] - Mock implementations for testing

pub mod corpus;
pub mod embedders;
pub mod error;
pub mod pipeline;
pub mod providers;
pub mod security;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{FactCheckError, ProviderError, ProviderResult, Result};
pub use traits::{
    classifier::ClaimClassifier,
    embedder::Embedder,
    provider::{Completion, VerdictProvider},
    store::FactCheckStore,
};
pub use types::{
    config::{FactCheckConfig, SynthesisProfile},
    record::{Claim, FactCheckRecord, RunMode, StoredFactCheck},
    reference::{PatternKind, ReferenceHint},
    retrieval::{RetrievalHit, RetrievalMode, RetrievalResult},
    verdict::{Citation, ClaimType, Verdict, VerdictKind},
    verse::{Locator, Verse},
};

pub use corpus::CorpusIndex;
pub use pipeline::{FactChecker, FactCheckerBuilder, KeywordClassifier, RemoteClassifier};

// Re-export implementations
pub use embedders::{HashingEmbedder, OpenAIEmbedder};
pub use providers::{Gemini, OpenAI};
pub use stores::MemoryStore;

#[cfg(feature = "sqlite")]
pub use stores::SqliteStore;

// Re-export testing utilities
pub use testing::{MockCompletion, MockEmbedder, MockProvider};
