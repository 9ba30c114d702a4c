//! Configuration types for the fact-check pipeline.

use serde::{Deserialize, Serialize};

/// Confidence constants used by local synthesis.
///
/// The two deployments historically disagreed on these values, so they are
/// kept as named profiles instead of a single constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisProfile {
    /// Confidence when at least one citation was built ("Partially supported")
    pub cited_confidence: u8,

    /// Confidence when nothing usable was retrieved ("Unclear")
    pub uncited_confidence: u8,
}

impl SynthesisProfile {
    /// Providers were configured but every one of them failed.
    pub const CASCADE: Self = Self {
        cited_confidence: 65,
        uncited_confidence: 30,
    };

    /// No providers configured at all.
    pub const OFFLINE: Self = Self {
        cited_confidence: 70,
        uncited_confidence: 40,
    };

    /// Older keyword-matching fallback.
    pub const LEGACY: Self = Self {
        cited_confidence: 60,
        uncited_confidence: 30,
    };
}

/// Configuration for the fact-check pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheckConfig {
    /// Passages retrieved per claim.
    ///
    /// Default: 5.
    pub top_k: usize,

    /// Maximum citations built by local synthesis.
    ///
    /// Default: 3.
    pub max_citations: usize,

    /// Citation text is truncated past this many characters.
    ///
    /// Default: 200.
    pub citation_chars: usize,

    /// Used when providers exist but all failed.
    pub cascade: SynthesisProfile,

    /// Used when no providers are configured.
    pub offline: SynthesisProfile,
}

impl Default for FactCheckConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            max_citations: 3,
            citation_chars: 200,
            cascade: SynthesisProfile::CASCADE,
            offline: SynthesisProfile::OFFLINE,
        }
    }
}

impl FactCheckConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set passages retrieved per claim.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the maximum number of locally built citations.
    pub fn with_max_citations(mut self, max: usize) -> Self {
        self.max_citations = max;
        self
    }

    /// Set the citation truncation length.
    pub fn with_citation_chars(mut self, chars: usize) -> Self {
        self.citation_chars = chars;
        self
    }

    /// Set the profile used after a failed provider cascade.
    pub fn with_cascade_profile(mut self, profile: SynthesisProfile) -> Self {
        self.cascade = profile;
        self
    }

    /// Set the profile used when running without providers.
    pub fn with_offline_profile(mut self, profile: SynthesisProfile) -> Self {
        self.offline = profile;
        self
    }
}
