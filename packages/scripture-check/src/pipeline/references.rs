//! Scripture reference extraction.
//!
//! A fixed, ordered list of case-insensitive patterns is run over the claim.
//! Every match of every pattern is returned: first by pattern order, then
//! left to right within a pattern. Overlapping matches from different
//! patterns are all kept ("chapter 2 verse 47" matches two patterns).

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::reference::{PatternKind, ReferenceHint};

lazy_static! {
    static ref PATTERNS: Vec<(PatternKind, Regex)> = vec![
        // Gita 2:47
        (
            PatternKind::ColonForm,
            Regex::new(r"(?i)(\w+)\s+(\d+):(\d+)").unwrap(),
        ),
        // Gita 2 verse 47
        (
            PatternKind::VerseWordForm,
            Regex::new(r"(?i)(\w+)\s+(\d+)\s+verse\s+(\d+)").unwrap(),
        ),
        // surah 2 ayah 255
        (
            PatternKind::SurahAyahForm,
            Regex::new(r"(?i)surah\s+(\d+)\s+ayah\s+(\d+)").unwrap(),
        ),
        // chapter 2 verse 47
        (
            PatternKind::ChapterVerseForm,
            Regex::new(r"(?i)chapter\s+(\d+)\s+verse\s+(\d+)").unwrap(),
        ),
    ];
}

/// Extract every reference-looking fragment from a claim.
///
/// Pure: no I/O, cannot fail, same input gives the same output.
pub fn extract_references(claim: &str) -> Vec<ReferenceHint> {
    let mut hints = Vec::new();

    for (kind, pattern) in PATTERNS.iter() {
        for caps in pattern.captures_iter(claim) {
            let raw_match = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
            let groups = caps
                .iter()
                .skip(1)
                .map(|g| g.map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect();
            hints.push(ReferenceHint::new(*kind, raw_match, groups));
        }
    }

    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_form() {
        let hints = extract_references("Does Bhagavad Gita 2:47 say that outcomes don't matter?");
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].pattern_kind, PatternKind::ColonForm);
        assert_eq!(hints[0].raw_match, "Gita 2:47");
        assert_eq!(hints[0].captured_groups, vec!["Gita", "2", "47"]);
    }

    #[test]
    fn test_no_references() {
        assert!(extract_references("This is a general claim about religion").is_empty());
    }

    #[test]
    fn test_surah_ayah_case_insensitive() {
        let hints = extract_references("SURAH 2 Ayah 255 describes the throne");
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].pattern_kind, PatternKind::SurahAyahForm);
        assert_eq!(hints[0].captured_groups, vec!["2", "255"]);
    }

    #[test]
    fn test_overlapping_patterns_all_returned_in_pattern_order() {
        let hints = extract_references("Gita chapter 2 verse 47");
        let kinds: Vec<_> = hints.iter().map(|h| h.pattern_kind).collect();
        assert_eq!(
            kinds,
            vec![PatternKind::VerseWordForm, PatternKind::ChapterVerseForm]
        );
        assert_eq!(hints[0].captured_groups, vec!["chapter", "2", "47"]);
        assert_eq!(hints[1].captured_groups, vec!["2", "47"]);
    }

    #[test]
    fn test_multiple_matches_left_to_right() {
        let hints = extract_references("Compare John 3:16 with Matthew 5:9 and John 3:16");
        let raws: Vec<_> = hints.iter().map(|h| h.raw_match.as_str()).collect();
        assert_eq!(raws, vec!["John 3:16", "Matthew 5:9", "John 3:16"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let claim = "Bhagavad Gita 2:47 and surah 1 ayah 1";
        assert_eq!(extract_references(claim), extract_references(claim));
    }
}
