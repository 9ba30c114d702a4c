//! Claim classification strategies.
//!
//! Two interchangeable implementations of [`ClaimClassifier`]:
//! - [`KeywordClassifier`] - deterministic keyword membership, no I/O
//! - [`RemoteClassifier`] - asks a completion backend, answers `Mixed` on
//!   any failure

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::traits::{classifier::ClaimClassifier, provider::Completion};
use crate::types::verdict::ClaimType;

/// Keywords that suggest a textual claim.
const TEXTUAL_KEYWORDS: &[&str] = &[
    "says", "states", "mentions", "writes", "teaches", "verse", "chapter", "book",
];

/// Keywords that suggest a historical claim.
const HISTORICAL_KEYWORDS: &[&str] = &[
    "history",
    "historical",
    "event",
    "occurred",
    "happened",
    "time",
    "period",
];

/// Keywords that suggest a theological claim.
const THEOLOGICAL_KEYWORDS: &[&str] = &[
    "belief", "faith", "divine", "god", "spiritual", "sacred", "holy",
];

/// Classify a claim by keyword membership.
///
/// Checked in fixed priority order: textual, then historical, then
/// theological. First match wins; no match is `Mixed`. Keywords match as
/// substrings of the lower-cased claim.
pub fn classify_by_keywords(claim: &str) -> ClaimType {
    let claim_lower = claim.to_lowercase();
    let matches_any = |keywords: &[&str]| keywords.iter().any(|k| claim_lower.contains(k));

    if matches_any(TEXTUAL_KEYWORDS) {
        ClaimType::Textual
    } else if matches_any(HISTORICAL_KEYWORDS) {
        ClaimType::Historical
    } else if matches_any(THEOLOGICAL_KEYWORDS) {
        ClaimType::Theological
    } else {
        ClaimType::Mixed
    }
}

/// Deterministic local classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClaimClassifier for KeywordClassifier {
    async fn classify(&self, claim: &str) -> ClaimType {
        classify_by_keywords(claim)
    }
}

/// Closed-category classification prompt.
pub fn format_classify_prompt(claim: &str) -> String {
    format!(
        r#"Classify the following claim about religious texts into one of these categories:
- textual: Claims about what a specific text says
- historical: Claims about historical events or contexts
- mixed: Claims that combine textual and historical elements
- theological: Claims about matters of faith or belief that cannot be empirically verified

Claim: "{}"

Respond with only the category name."#,
        claim
    )
}

/// Classifier backed by a remote completion model.
pub struct RemoteClassifier<C: Completion> {
    backend: C,
    max_tokens: u32,
}

impl<C: Completion> RemoteClassifier<C> {
    pub fn new(backend: C) -> Self {
        Self {
            backend,
            max_tokens: 10,
        }
    }
}

#[async_trait]
impl<C: Completion> ClaimClassifier for RemoteClassifier<C> {
    async fn classify(&self, claim: &str) -> ClaimType {
        let prompt = format_classify_prompt(claim);

        match self.backend.complete(&prompt, self.max_tokens).await {
            Ok(answer) => match ClaimType::parse_category(&answer) {
                Some(claim_type) => {
                    debug!(backend = self.backend.name(), claim_type = %claim_type, "Claim classified");
                    claim_type
                }
                None => {
                    warn!(
                        backend = self.backend.name(),
                        answer = %answer,
                        "Classifier answered outside the known categories, using mixed"
                    );
                    ClaimType::Mixed
                }
            },
            Err(e) => {
                if e.is_quota() {
                    warn!(backend = self.backend.name(), "Quota exceeded during claim classification, using default");
                } else {
                    error!(backend = self.backend.name(), error = %e, "Error classifying claim");
                }
                ClaimType::Mixed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::testing::MockCompletion;

    #[test]
    fn test_textual_keywords() {
        assert_eq!(
            classify_by_keywords("Bhagavad Gita 2:47 says that outcomes don't matter"),
            ClaimType::Textual
        );
    }

    #[test]
    fn test_historical_keywords() {
        assert_eq!(
            classify_by_keywords("The Bible was written over a period of centuries"),
            ClaimType::Historical
        );
    }

    #[test]
    fn test_textual_beats_theological() {
        assert_eq!(
            classify_by_keywords("The book teaches faith in God"),
            ClaimType::Textual
        );
    }

    #[test]
    fn test_historical_beats_theological() {
        assert_eq!(
            classify_by_keywords("Faith in the divine grew over a historical period"),
            ClaimType::Historical
        );
    }

    #[test]
    fn test_theological_keywords() {
        assert_eq!(
            classify_by_keywords("Salvation comes through faith alone"),
            ClaimType::Theological
        );
    }

    #[test]
    fn test_no_keywords_is_mixed() {
        assert_eq!(classify_by_keywords("Moses parted the Red Sea"), ClaimType::Mixed);
    }

    #[test]
    fn test_keyword_classification_is_deterministic() {
        let claim = "The Quran mentions Mary";
        assert_eq!(classify_by_keywords(claim), classify_by_keywords(claim));
    }

    #[tokio::test]
    async fn test_remote_parses_category() {
        let classifier = RemoteClassifier::new(MockCompletion::answering("Historical"));
        assert_eq!(
            classifier.classify("The Gita was written in 500 BCE").await,
            ClaimType::Historical
        );
    }

    #[tokio::test]
    async fn test_remote_unknown_answer_is_mixed() {
        let classifier = RemoteClassifier::new(MockCompletion::answering("I cannot say"));
        assert_eq!(classifier.classify("claim").await, ClaimType::Mixed);
    }

    #[tokio::test]
    async fn test_remote_quota_error_is_mixed() {
        let classifier = RemoteClassifier::new(MockCompletion::failing(
            ProviderError::QuotaExceeded("429".into()),
        ));
        assert_eq!(classifier.classify("claim").await, ClaimType::Mixed);
    }

    #[tokio::test]
    async fn test_remote_network_error_is_mixed() {
        let classifier =
            RemoteClassifier::new(MockCompletion::failing(ProviderError::Http("down".into())));
        assert_eq!(classifier.classify("claim").await, ClaimType::Mixed);
    }
}
