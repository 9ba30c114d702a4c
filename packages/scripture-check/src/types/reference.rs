//! Scripture reference hints pulled out of claim text.

use serde::{Deserialize, Serialize};

/// Which reference pattern produced a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// `Gita 2:47`
    ColonForm,
    /// `Gita 2 verse 47`
    VerseWordForm,
    /// `surah 2 ayah 255`
    SurahAyahForm,
    /// `chapter 2 verse 47`
    ChapterVerseForm,
}

/// A reference-looking fragment of a claim.
///
/// Advisory only: nothing guarantees the captured groups resolve to a verse
/// in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceHint {
    pub pattern_kind: PatternKind,

    /// The full matched text
    pub raw_match: String,

    /// Capture groups in pattern order
    pub captured_groups: Vec<String>,
}

impl ReferenceHint {
    pub fn new(
        pattern_kind: PatternKind,
        raw_match: impl Into<String>,
        captured_groups: Vec<String>,
    ) -> Self {
        Self {
            pattern_kind,
            raw_match: raw_match.into(),
            captured_groups,
        }
    }
}
