//! Embedder implementations.
//!
//! - [`OpenAIEmbedder`] - remote embeddings via the OpenAI API
//! - [`HashingEmbedder`] - deterministic local feature hashing, no network

pub mod hashing;
pub mod openai;

pub use hashing::HashingEmbedder;
pub use openai::OpenAIEmbedder;
