//! Verdict types - the structured outcome of a fact check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a claim falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    /// What a specific text says
    Textual,
    /// Historical events or contexts
    Historical,
    /// Both textual and historical elements
    Mixed,
    /// Matters of faith that cannot be empirically verified
    Theological,
    /// Only assigned when the pipeline failed before classification finished
    Unknown,
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Textual => "textual",
            Self::Historical => "historical",
            Self::Mixed => "mixed",
            Self::Theological => "theological",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a classifier answer. Only the four claim categories are accepted.
    pub fn parse_category(s: &str) -> Option<Self> {
        let cleaned = s
            .trim()
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        match cleaned.as_str() {
            "textual" => Some(Self::Textual),
            "historical" => Some(Self::Historical),
            "mixed" => Some(Self::Mixed),
            "theological" => Some(Self::Theological),
            _ => None,
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The conclusion of a fact check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerdictKind {
    Supported,
    Contradicted,
    #[serde(rename = "Partially supported")]
    PartiallySupported,
    Unclear,
    Theological,
}

impl VerdictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Supported => "Supported",
            Self::Contradicted => "Contradicted",
            Self::PartiallySupported => "Partially supported",
            Self::Unclear => "Unclear",
            Self::Theological => "Theological",
        }
    }

    /// Lenient parse of provider output ("partially supported", "PARTIALLY_SUPPORTED").
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match normalized.as_str() {
            "supported" => Some(Self::Supported),
            "contradicted" => Some(Self::Contradicted),
            "partiallysupported" => Some(Self::PartiallySupported),
            "unclear" => Some(Self::Unclear),
            "theological" => Some(Self::Theological),
            _ => None,
        }
    }
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scripture passage cited in support of a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub work: String,
    pub reference: String,
    pub text: String,
}

impl Citation {
    pub fn new(
        work: impl Into<String>,
        reference: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            work: work.into(),
            reference: reference.into(),
            text: text.into(),
        }
    }
}

/// A complete verdict.
///
/// Every field is populated before a verdict leaves the orchestrator;
/// `confidence` is always within 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub verdict: VerdictKind,
    pub confidence: u8,
    pub rationale: String,
    pub citations: Vec<Citation>,
    pub alternative_views: Vec<String>,
    pub next_steps: Vec<String>,
}

impl Verdict {
    /// Create a verdict with no citations or follow-ups.
    pub fn new(verdict: VerdictKind, confidence: u8, rationale: impl Into<String>) -> Self {
        Self {
            verdict,
            confidence: confidence.min(100),
            rationale: rationale.into(),
            citations: Vec::new(),
            alternative_views: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn with_citations(mut self, citations: Vec<Citation>) -> Self {
        self.citations = citations;
        self
    }

    pub fn with_alternative_views(
        mut self,
        views: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.alternative_views = views.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_next_steps(mut self, steps: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.next_steps = steps.into_iter().map(Into::into).collect();
        self
    }
}
