//! The scripture corpus: loading, samples and the searchable index.

pub mod index;
pub mod loader;
pub mod samples;

pub use index::{l2_distance, CorpusIndex};
pub use loader::{load_corpus_dir, load_corpus_file, load_corpus_or_samples};
pub use samples::{sample_verses, GITA_2_47};
