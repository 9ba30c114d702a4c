//! Fact-check records - a verdict plus the context it was produced in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reference::ReferenceHint;
use super::verdict::{ClaimType, Verdict};

/// An incoming claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub text: String,

    /// Response language tag
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Claim {
    /// Create an English claim.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: default_language(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Marker for records produced with no remote providers configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Offline,
}

/// A finished fact check.
///
/// Created once per orchestrator call and never mutated afterwards.
/// Serializes flat: the verdict fields sit alongside the metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckRecord {
    #[serde(flatten)]
    pub verdict: Verdict,

    pub claim: String,
    pub claim_type: ClaimType,
    pub language: String,
    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub references_found: Vec<ReferenceHint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<RunMode>,
}

impl FactCheckRecord {
    /// Attach claim metadata to a verdict, timestamped now.
    pub fn new(
        verdict: Verdict,
        claim: &Claim,
        claim_type: ClaimType,
        references_found: Vec<ReferenceHint>,
    ) -> Self {
        Self {
            verdict,
            claim: claim.text.clone(),
            claim_type,
            language: claim.language.clone(),
            timestamp: Utc::now(),
            references_found,
            mode: None,
        }
    }

    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// A record as held by a persistence store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFactCheck {
    pub id: i64,

    #[serde(flatten)]
    pub record: FactCheckRecord,
}
