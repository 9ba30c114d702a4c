//! The fact checker - main entry point for the library.
//!
//! One call runs the whole pipeline:
//!
//! 1. classify the claim
//! 2. extract scripture references
//! 3. retrieve passages from the corpus index
//! 4. try each verdict provider in priority order, stopping at the first
//!    success
//! 5. fall back to local synthesis when none answered
//! 6. attach claim metadata and hand the record to the store
//!
//! [`FactChecker::check`] never fails. A failure in steps 1-3 (including a
//! panic) yields a fixed "Unclear / confidence 0" record; provider failures
//! cascade; persistence failures are logged and otherwise ignored.

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::corpus::CorpusIndex;
use crate::error::Result;
use crate::traits::{
    classifier::ClaimClassifier, provider::VerdictProvider, store::FactCheckStore,
};
use crate::types::{
    config::{FactCheckConfig, SynthesisProfile},
    record::{Claim, FactCheckRecord, RunMode, StoredFactCheck},
    reference::ReferenceHint,
    retrieval::RetrievalResult,
    verdict::{ClaimType, Verdict, VerdictKind},
};

use super::classify::KeywordClassifier;
use super::references::extract_references;
use super::synthesis::LocalSynthesizer;

/// Rationale of the record returned when the pipeline itself fails.
pub const FAILURE_RATIONALE: &str = "Unable to process the claim at this time.";

/// Next step suggested with the failure record.
pub const FAILURE_NEXT_STEP: &str =
    "Please try rephrasing your claim or contact support if the issue persists.";

/// Claim fact-checking orchestrator.
///
/// Holds the shared read-only corpus index and an ordered provider list.
/// With no providers it runs offline: local synthesis answers every claim
/// and records carry the offline mode marker.
///
/// # Example
///
/// ```rust,ignore
/// let index = Arc::new(CorpusIndex::build(verses, embedder).await?);
///
/// let checker = FactChecker::builder(index)
///     .provider(OpenAI::from_env()?)
///     .provider(Gemini::from_env()?)
///     .store(Arc::new(MemoryStore::new()))
///     .build();
///
/// let record = checker.check(&Claim::new("Gita 2:47 says outcomes don't matter")).await;
/// ```
pub struct FactChecker {
    index: Arc<CorpusIndex>,
    classifier: Box<dyn ClaimClassifier>,
    providers: Vec<Box<dyn VerdictProvider>>,
    store: Option<Arc<dyn FactCheckStore>>,
    synthesizer: LocalSynthesizer,
    config: FactCheckConfig,
}

/// Builder for [`FactChecker`].
pub struct FactCheckerBuilder {
    index: Arc<CorpusIndex>,
    classifier: Box<dyn ClaimClassifier>,
    providers: Vec<Box<dyn VerdictProvider>>,
    store: Option<Arc<dyn FactCheckStore>>,
    config: FactCheckConfig,
}

impl FactCheckerBuilder {
    /// Replace the default keyword classifier.
    pub fn classifier(mut self, classifier: impl ClaimClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Replace the classifier with one chosen at runtime.
    pub fn boxed_classifier(mut self, classifier: Box<dyn ClaimClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Append a provider at the lowest priority so far.
    pub fn provider(mut self, provider: impl VerdictProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Append already-boxed providers, keeping their order.
    pub fn providers(mut self, providers: Vec<Box<dyn VerdictProvider>>) -> Self {
        self.providers.extend(providers);
        self
    }

    /// Persist every answered claim to this store.
    pub fn store(mut self, store: Arc<dyn FactCheckStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn config(mut self, config: FactCheckConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> FactChecker {
        FactChecker {
            synthesizer: LocalSynthesizer::from_config(&self.config),
            index: self.index,
            classifier: self.classifier,
            providers: self.providers,
            store: self.store,
            config: self.config,
        }
    }
}

impl FactChecker {
    /// Start building a checker over a corpus index.
    pub fn builder(index: Arc<CorpusIndex>) -> FactCheckerBuilder {
        FactCheckerBuilder {
            index,
            classifier: Box::new(KeywordClassifier::new()),
            providers: Vec::new(),
            store: None,
            config: FactCheckConfig::default(),
        }
    }

    /// Whether no remote providers are configured.
    pub fn is_offline(&self) -> bool {
        self.providers.is_empty()
    }

    /// Provider names in priority order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn config(&self) -> &FactCheckConfig {
        &self.config
    }

    /// Fact-check a claim.
    ///
    /// Always returns a complete record with confidence in 0..=100.
    pub async fn check(&self, claim: &Claim) -> FactCheckRecord {
        let outcome = AssertUnwindSafe(self.run(claim)).catch_unwind().await;

        let record = match outcome {
            Ok(Ok(record)) => record,
            Ok(Err(e)) => {
                error!(claim = %claim.text, error = %e, "Error in fact checking");
                return self.failure_record(claim);
            }
            Err(_) => {
                error!(claim = %claim.text, "Fact-check pipeline panicked");
                return self.failure_record(claim);
            }
        };

        self.persist(&record).await;
        record
    }

    /// The most recent stored fact checks, newest first.
    ///
    /// Empty when no store is configured.
    pub async fn history(&self, limit: usize) -> Result<Vec<StoredFactCheck>> {
        match &self.store {
            Some(store) => store.recent(limit).await,
            None => Ok(Vec::new()),
        }
    }

    /// A single stored fact check.
    pub async fn export(&self, id: i64) -> Result<Option<StoredFactCheck>> {
        match &self.store {
            Some(store) => store.get(id).await,
            None => Ok(None),
        }
    }

    async fn run(&self, claim: &Claim) -> Result<FactCheckRecord> {
        let claim_type = self.classifier.classify(&claim.text).await;
        let references = extract_references(&claim.text);
        let retrieval = self.index.search(&claim.text, self.config.top_k).await?;

        debug!(
            claim_type = %claim_type,
            references = references.len(),
            hits = retrieval.len(),
            mode = ?retrieval.mode,
            "Claim prepared"
        );

        let verdict = match self.cascade(claim, claim_type).await {
            Some(verdict) => verdict,
            None => self.synthesize(claim, claim_type, &references, &retrieval),
        };

        let record = FactCheckRecord::new(verdict, claim, claim_type, references);
        Ok(self.mark_mode(record))
    }

    /// Try providers strictly in order; first success wins.
    async fn cascade(&self, claim: &Claim, claim_type: ClaimType) -> Option<Verdict> {
        for provider in &self.providers {
            let attempt = AssertUnwindSafe(provider.produce(
                &claim.text,
                claim_type,
                &claim.language,
            ))
            .catch_unwind()
            .await;

            match attempt {
                Ok(Ok(verdict)) => {
                    info!(provider = provider.name(), verdict = %verdict.verdict, "Claim answered by provider");
                    return Some(verdict);
                }
                Ok(Err(e)) if e.is_quota() => {
                    warn!(provider = provider.name(), error = %e, "Provider quota exceeded, trying next");
                }
                Ok(Err(e)) => {
                    warn!(provider = provider.name(), error = %e, "Provider failed, trying next");
                }
                Err(_) => {
                    error!(provider = provider.name(), "Provider panicked, trying next");
                }
            }
        }

        None
    }

    fn synthesize(
        &self,
        claim: &Claim,
        claim_type: ClaimType,
        references: &[ReferenceHint],
        retrieval: &RetrievalResult,
    ) -> Verdict {
        let profile: SynthesisProfile = if self.is_offline() {
            self.config.offline
        } else {
            warn!(
                providers = self.providers.len(),
                "All providers failed, using local synthesis"
            );
            self.config.cascade
        };

        self.synthesizer
            .synthesize(&claim.text, claim_type, references, retrieval, profile)
    }

    fn mark_mode(&self, record: FactCheckRecord) -> FactCheckRecord {
        if self.is_offline() {
            record.with_mode(RunMode::Offline)
        } else {
            record
        }
    }

    fn failure_record(&self, claim: &Claim) -> FactCheckRecord {
        let verdict = Verdict::new(VerdictKind::Unclear, 0, FAILURE_RATIONALE)
            .with_next_steps([FAILURE_NEXT_STEP]);
        self.mark_mode(FactCheckRecord::new(
            verdict,
            claim,
            ClaimType::Unknown,
            Vec::new(),
        ))
    }

    async fn persist(&self, record: &FactCheckRecord) {
        let Some(store) = &self.store else {
            return;
        };

        match store.append(record).await {
            Ok(id) => debug!(id, "Fact check stored"),
            Err(e) => error!(error = %e, "Error storing fact check"),
        }
    }
}
