//! Fact-check pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Claim classification (keyword or remote)
//! - Scripture reference extraction
//! - Corpus retrieval
//! - Cascading verdict providers
//! - Local synthesis when no provider answers

pub mod classify;
pub mod orchestrator;
pub mod references;
pub mod synthesis;

pub use classify::{classify_by_keywords, format_classify_prompt, KeywordClassifier, RemoteClassifier};
pub use orchestrator::{FactChecker, FactCheckerBuilder, FAILURE_NEXT_STEP, FAILURE_RATIONALE};
pub use references::extract_references;
pub use synthesis::{truncate_chars, LocalSynthesizer, CONFIGURE_PROVIDER_STEP};
