//! Loading verses from JSON corpus files.
//!
//! Each `*.json` file in the corpus directory holds an array of verse
//! records. The lower-cased file stem is the default work name, so
//! `data/Bhagavad_Gita.json` yields verses of work `bhagavad_gita`.

use std::path::Path;
use tracing::{error, info, warn};

use crate::error::{FactCheckError, Result};
use crate::types::verse::Verse;

use super::samples::sample_verses;

/// Load every JSON corpus file in a directory.
///
/// Files that fail to parse are logged and skipped. Files are read in
/// file-name order so corpus order is stable between runs.
pub fn load_corpus_dir(dir: &Path) -> Result<Vec<Verse>> {
    let entries = std::fs::read_dir(dir).map_err(|e| FactCheckError::Corpus {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    let mut verses = Vec::new();
    for path in paths {
        match load_corpus_file(&path) {
            Ok(mut loaded) => {
                info!(path = %path.display(), verses = loaded.len(), "Loaded corpus file");
                verses.append(&mut loaded);
            }
            Err(e) => error!(path = %path.display(), error = %e, "Skipping corpus file"),
        }
    }

    Ok(verses)
}

/// Load one JSON corpus file.
pub fn load_corpus_file(path: &Path) -> Result<Vec<Verse>> {
    let corpus_error = |reason: String| FactCheckError::Corpus {
        path: path.display().to_string(),
        reason,
    };

    let work = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .ok_or_else(|| corpus_error("file has no usable name".into()))?;

    let raw = std::fs::read_to_string(path).map_err(|e| corpus_error(e.to_string()))?;
    let mut verses: Vec<Verse> =
        serde_json::from_str(&raw).map_err(|e| corpus_error(e.to_string()))?;

    for verse in &mut verses {
        if verse.work.trim().is_empty() {
            verse.work = work.clone();
        }
    }

    Ok(verses)
}

/// Load a corpus directory, falling back to the built-in samples when the
/// directory is missing or holds no verses.
pub fn load_corpus_or_samples(dir: &Path) -> Vec<Verse> {
    match load_corpus_dir(dir) {
        Ok(verses) if !verses.is_empty() => verses,
        Ok(_) => {
            warn!(dir = %dir.display(), "Corpus directory is empty, using sample verses");
            sample_verses()
        }
        Err(e) => {
            warn!(error = %e, "Corpus directory unavailable, using sample verses");
            sample_verses()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::verse::Locator;

    #[test]
    fn test_load_dir_assigns_work_from_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("Quran.json"),
            r#"[{"surah": 1, "ayah": 1, "text": "In the name of Allah"}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("bible.json"),
            r#"[{"book": "Matthew", "chapter": 5, "verse": 9, "text": "Blessed are the peacemakers", "work": "new_testament"}]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let verses = load_corpus_dir(dir.path()).unwrap();
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].work, "quran");
        assert_eq!(verses[0].locator, Locator::surah_ayah(1, 1));
        assert_eq!(verses[1].work, "new_testament");
    }

    #[test]
    fn test_load_dir_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), "not json").unwrap();
        std::fs::write(
            dir.path().join("b.json"),
            r#"[{"chapter": 2, "verse": 47, "text": "You have the right to work"}]"#,
        )
        .unwrap();

        let verses = load_corpus_dir(dir.path()).unwrap();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].work, "b");
    }

    #[test]
    fn test_missing_dir_falls_back_to_samples() {
        let verses = load_corpus_or_samples(Path::new("/definitely/not/here"));
        assert_eq!(verses, sample_verses());
    }
}
