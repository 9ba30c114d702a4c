//! Local verdict synthesis - the provider-free fallback of last resort.
//!
//! Builds a verdict straight from retrieval results. Never fails and always
//! returns a fully populated [`Verdict`].

use crate::types::{
    config::{FactCheckConfig, SynthesisProfile},
    reference::ReferenceHint,
    retrieval::{RetrievalHit, RetrievalResult},
    verdict::{Citation, ClaimType, Verdict, VerdictKind},
    verse::Locator,
};

/// Suggestion attached to every locally synthesized verdict.
pub const CONFIGURE_PROVIDER_STEP: &str =
    "Configure a remote AI provider (OpenAI or Gemini) for deeper analysis";

/// Deterministic verdict builder.
#[derive(Debug, Clone)]
pub struct LocalSynthesizer {
    max_citations: usize,
    citation_chars: usize,
}

impl Default for LocalSynthesizer {
    fn default() -> Self {
        Self::from_config(&FactCheckConfig::default())
    }
}

impl LocalSynthesizer {
    pub fn from_config(config: &FactCheckConfig) -> Self {
        Self {
            max_citations: config.max_citations,
            citation_chars: config.citation_chars,
        }
    }

    /// Build a verdict from retrieval results.
    ///
    /// Hits whose locator matches one of the claim's reference hints are
    /// cited first; otherwise retrieval order is kept. Hits with empty text
    /// are skipped.
    pub fn synthesize(
        &self,
        claim: &str,
        claim_type: ClaimType,
        references: &[ReferenceHint],
        retrieval: &RetrievalResult,
        profile: SynthesisProfile,
    ) -> Verdict {
        let usable: Vec<&RetrievalHit> = retrieval
            .iter()
            .filter(|hit| !hit.verse.text.trim().is_empty())
            .collect();

        let (referenced, rest): (Vec<&RetrievalHit>, Vec<&RetrievalHit>) = usable
            .into_iter()
            .partition(|hit| references.iter().any(|r| hint_matches(r, &hit.verse.locator)));

        let citations: Vec<Citation> = referenced
            .into_iter()
            .chain(rest)
            .take(self.max_citations)
            .map(|hit| self.citation(hit))
            .collect();

        let mut rationale = if citations.is_empty() {
            format!(
                "Based on local scripture search for \"{}\", no specific passages were found in local data.",
                claim
            )
        } else {
            format!(
                "Based on local scripture search for \"{}\", found {} relevant passage{}.",
                claim,
                citations.len(),
                if citations.len() == 1 { "" } else { "s" }
            )
        };
        rationale.push_str(
            " This is a local search result only and has not been verified by AI analysis.",
        );
        if claim_type == ClaimType::Theological {
            rationale.push_str(
                " The claim concerns matters of faith, which text search alone cannot settle.",
            );
        }

        if citations.is_empty() {
            Verdict::new(VerdictKind::Unclear, profile.uncited_confidence, rationale)
                .with_alternative_views([
                    "Consider consulting primary religious texts and scholarly sources directly.",
                ])
                .with_next_steps([
                    CONFIGURE_PROVIDER_STEP,
                    "Try rephrasing your claim with more specific scripture references",
                    "Consult primary religious texts and commentaries directly",
                ])
        } else {
            Verdict::new(
                VerdictKind::PartiallySupported,
                profile.cited_confidence,
                rationale,
            )
            .with_citations(citations)
            .with_alternative_views([
                "Consult multiple translations and commentaries for deeper understanding.",
                "Consider the historical and cultural context of the passages.",
            ])
            .with_next_steps([
                CONFIGURE_PROVIDER_STEP,
                "Review the cited passages in their full context",
                "Consult multiple translations for better understanding",
                "Check scholarly commentaries for detailed analysis",
            ])
        }
    }

    fn citation(&self, hit: &RetrievalHit) -> Citation {
        Citation::new(
            hit.verse.display_work(),
            hit.verse.locator.reference(),
            truncate_chars(&hit.verse.text, self.citation_chars),
        )
    }
}

/// Truncate to `max` characters, appending `...` when anything was cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Whether a hint's trailing two numbers point at this locator.
fn hint_matches(hint: &ReferenceHint, locator: &Locator) -> bool {
    let numbers: Vec<u32> = hint
        .captured_groups
        .iter()
        .filter_map(|g| g.parse().ok())
        .collect();

    let (major, minor) = match numbers.as_slice() {
        [.., major, minor] => (*major, *minor),
        _ => return false,
    };

    locator.chapter.or(locator.surah) == Some(major) && locator.verse.or(locator.ayah) == Some(minor)
}
