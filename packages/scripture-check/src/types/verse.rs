//! Verse types - scripture passages and their locators.

use serde::{Deserialize, Serialize};

/// Where a verse sits inside its work.
///
/// Different traditions address passages differently (chapter/verse,
/// surah/ayah, book/chapter/verse). Loaded corpora set whichever fields
/// apply; `label` carries a free-form locator when none of the structured
/// fields fit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surah: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ayah: Option<u32>,

    /// Free-form locator ("Genesis 1", "Psalm 23")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Locator {
    /// Chapter/verse locator.
    pub fn chapter_verse(chapter: u32, verse: u32) -> Self {
        Self {
            chapter: Some(chapter),
            verse: Some(verse),
            ..Default::default()
        }
    }

    /// Surah/ayah locator.
    pub fn surah_ayah(surah: u32, ayah: u32) -> Self {
        Self {
            surah: Some(surah),
            ayah: Some(ayah),
            ..Default::default()
        }
    }

    /// Book/chapter/verse locator.
    pub fn book_chapter_verse(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: Some(book.into()),
            chapter: Some(chapter),
            verse: Some(verse),
            ..Default::default()
        }
    }

    /// Free-form locator.
    pub fn free_form(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Render a citation reference.
    ///
    /// Primary part is the first of chapter, surah, book; secondary part is
    /// verse, then ayah. Falls back to the free-form label, then to an empty
    /// string.
    pub fn reference(&self) -> String {
        let primary = self
            .chapter
            .or(self.surah)
            .map(|n| n.to_string())
            .or_else(|| self.book.clone());
        let secondary = self.verse.or(self.ayah);

        match (primary, secondary) {
            (Some(p), Some(s)) => format!("{}:{}", p, s),
            (Some(p), None) => p,
            (None, Some(s)) => s.to_string(),
            (None, None) => self.label.clone().unwrap_or_default(),
        }
    }
}

/// A single scripture passage.
///
/// Immutable once loaded; owned by the corpus index for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Work identifier, e.g. `bhagavad_gita`
    #[serde(default)]
    pub work: String,

    #[serde(flatten)]
    pub locator: Locator,

    /// Passage text in the corpus language
    #[serde(default)]
    pub text: String,

    /// Text in the original script
    #[serde(default, rename = "original", skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,

    /// Translation or translator name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl Verse {
    /// Create a new verse.
    pub fn new(work: impl Into<String>, locator: Locator, text: impl Into<String>) -> Self {
        Self {
            work: work.into(),
            locator,
            text: text.into(),
            original_text: None,
            translation: None,
        }
    }

    /// Set the original-script text.
    pub fn with_original(mut self, original: impl Into<String>) -> Self {
        self.original_text = Some(original.into());
        self
    }

    /// Set the translation.
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    /// Human-readable work name (`bhagavad_gita` → `Bhagavad Gita`).
    pub fn display_work(&self) -> String {
        display_work_name(&self.work)
    }
}

/// Title-case a work identifier, treating underscores as spaces.
pub fn display_work_name(work: &str) -> String {
    if work.trim().is_empty() {
        return "Unknown Scripture".to_string();
    }

    work.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
