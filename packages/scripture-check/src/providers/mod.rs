//! Remote verdict providers.
//!
//! Each provider turns its own response shape into text and hands it to the
//! shared [`payload`] adapter, so every provider fails the same typed way on
//! malformed output.

pub mod gemini;
pub mod openai;
pub mod payload;
pub mod prompts;

pub use gemini::Gemini;
pub use openai::OpenAI;
pub use payload::{parse_verdict_payload, strip_code_fences};
pub use prompts::{format_scholar_prompt, format_verdict_prompt};
