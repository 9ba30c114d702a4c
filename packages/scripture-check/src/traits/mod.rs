//! Core trait abstractions for the fact-check library.
//!
//! These traits define the seams applications plug into: embedding models,
//! remote reasoning providers, claim classifiers, and persistence.

pub mod classifier;
pub mod embedder;
pub mod provider;
pub mod store;
