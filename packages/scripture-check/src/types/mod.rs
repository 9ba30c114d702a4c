//! Data types for the fact-check library.

pub mod config;
pub mod record;
pub mod reference;
pub mod retrieval;
pub mod verdict;
pub mod verse;
