//! Provider payload adapter: raw model text into a [`Verdict`].
//!
//! Models wrap JSON in markdown fences or a sentence of preamble often
//! enough that parsing has to tolerate it. Anything that still does not fit
//! the verdict shape is a typed [`ProviderError::MalformedPayload`].

use serde::{Deserialize, Deserializer};

use crate::error::{ProviderError, ProviderResult};
use crate::types::verdict::{Citation, Verdict, VerdictKind};

#[derive(Deserialize)]
struct RawVerdict {
    verdict: String,
    confidence: serde_json::Value,
    rationale: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    citations: Vec<RawCitation>,
    #[serde(default, deserialize_with = "null_as_empty")]
    alternative_views: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    next_steps: Vec<String>,
}

/// `null` lists read as empty, same as a missing key.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
struct RawCitation {
    #[serde(default)]
    work: String,
    #[serde(default)]
    reference: String,
    #[serde(default)]
    text: String,
}

/// Remove markdown code fences around a payload.
pub fn strip_code_fences(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```JSON")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Parse provider output into a verdict.
pub fn parse_verdict_payload(raw: &str) -> ProviderResult<Verdict> {
    let parsed: RawVerdict = serde_json::from_str(raw)
        .or_else(|_| serde_json::from_str(strip_code_fences(raw)))
        .or_else(|e| match outermost_object(raw) {
            Some(object) => serde_json::from_str(object),
            None => Err(e),
        })
        .map_err(|e| ProviderError::MalformedPayload(format!("not a verdict object: {}", e)))?;

    let verdict = VerdictKind::parse(&parsed.verdict).ok_or_else(|| {
        ProviderError::MalformedPayload(format!("unknown verdict: {}", parsed.verdict))
    })?;

    let confidence = parse_confidence(&parsed.confidence).ok_or_else(|| {
        ProviderError::MalformedPayload(format!("invalid confidence: {}", parsed.confidence))
    })?;

    let citations = parsed
        .citations
        .into_iter()
        .filter(|c| !(c.work.is_empty() && c.reference.is_empty() && c.text.is_empty()))
        .map(|c| Citation::new(c.work, c.reference, c.text))
        .collect();

    Ok(Verdict::new(verdict, confidence, parsed.rationale)
        .with_citations(citations)
        .with_alternative_views(parsed.alternative_views)
        .with_next_steps(parsed.next_steps))
}

/// Accepts `85`, `85.4`, `"85"` and `"85%"`; clamps to 0..=100.
fn parse_confidence(value: &serde_json::Value) -> Option<u8> {
    let number = match value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok()?,
        _ => return None,
    };

    if !number.is_finite() {
        return None;
    }

    Some(number.round().clamp(0.0, 100.0) as u8)
}

/// The slice from the first `{` to the last `}`.
fn outermost_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start < end).then(|| &raw[start..=end])
}
