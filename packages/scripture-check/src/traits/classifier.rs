//! Claim classifier trait.

use async_trait::async_trait;

use crate::types::verdict::ClaimType;

/// Assigns a claim to textual, historical, mixed or theological.
///
/// Infallible by contract: strategies that can fail internally answer
/// [`ClaimType::Mixed`] instead.
#[async_trait]
pub trait ClaimClassifier: Send + Sync {
    async fn classify(&self, claim: &str) -> ClaimType;
}
