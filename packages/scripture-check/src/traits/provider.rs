//! Verdict provider traits.
//!
//! A provider wraps one remote reasoning backend. The orchestrator holds an
//! ordered list of them and tries each in turn; providers never retry
//! internally.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ProviderResult;
use crate::types::verdict::{ClaimType, Verdict};

/// A backend capable of producing a structured verdict for a claim.
#[async_trait]
pub trait VerdictProvider: Send + Sync {
    /// Short name for logs ("openai", "gemini").
    fn name(&self) -> &str;

    /// Produce a verdict, or fail.
    ///
    /// Fails when the remote call errors or when its payload cannot be
    /// parsed into a [`Verdict`].
    async fn produce(
        &self,
        claim: &str,
        claim_type: ClaimType,
        language: &str,
    ) -> ProviderResult<Verdict>;
}

/// Raw single-turn text completion.
///
/// Used where a provider is asked something other than a verdict, such as
/// the closed-category claim classification prompt.
#[async_trait]
pub trait Completion: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Complete a prompt, returning the model's text.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> ProviderResult<String>;
}

#[async_trait]
impl<T: VerdictProvider + ?Sized> VerdictProvider for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn produce(
        &self,
        claim: &str,
        claim_type: ClaimType,
        language: &str,
    ) -> ProviderResult<Verdict> {
        (**self).produce(claim, claim_type, language).await
    }
}

#[async_trait]
impl<T: Completion + ?Sized> Completion for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> ProviderResult<String> {
        (**self).complete(prompt, max_tokens).await
    }
}
