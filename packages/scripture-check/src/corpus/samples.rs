//! Built-in sample verses for demos and tests.

use crate::types::verse::{Locator, Verse};

/// The Bhagavad Gita 2:47 sample text.
pub const GITA_2_47: &str = "You have the right to work, but never to the fruit of work.";

/// A handful of verses from three traditions.
pub fn sample_verses() -> Vec<Verse> {
    vec![
        Verse::new("bhagavad_gita", Locator::chapter_verse(2, 47), GITA_2_47)
            .with_translation("Swami Prabhupada")
            .with_original("कर्मण्येवाधिकारस्ते मा फलेषु कदाचन।"),
        Verse::new(
            "bhagavad_gita",
            Locator::chapter_verse(18, 66),
            "Abandon all varieties of religion and just surrender unto Me.",
        )
        .with_translation("Swami Prabhupada")
        .with_original("सर्वधर्मान्परित्यज्य मामेकं शरणं व्रज।"),
        Verse::new(
            "quran",
            Locator::surah_ayah(1, 1),
            "In the name of Allah, the Entirely Merciful, the Especially Merciful.",
        )
        .with_translation("Sahih International")
        .with_original("بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ"),
        Verse::new(
            "quran",
            Locator::surah_ayah(2, 255),
            "Allah - there is no deity except Him, the Ever-Living, the Self-Sustaining.",
        )
        .with_translation("Sahih International")
        .with_original("اللَّهُ لَا إِلَٰهَ إِلَّا هُوَ الْحَيُّ الْقَيُّومُ"),
        Verse::new(
            "bible",
            Locator::book_chapter_verse("Matthew", 5, 9),
            "Blessed are the peacemakers, for they will be called children of God.",
        )
        .with_translation("NIV")
        .with_original("μακάριοι οἱ εἰρηνοποιοί, ὅτι αὐτοὶ υἱοὶ θεοῦ κληθήσονται."),
    ]
}
