//! Typed errors for the fact-check library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur inside the fact-check pipeline.
///
/// None of these ever escape [`FactChecker::check`](crate::FactChecker::check);
/// they surface from the lower-level building blocks (index, stores, loaders).
#[derive(Debug, Error)]
pub enum FactCheckError {
    /// A verdict provider failed
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Embedding generation failed
    #[error("embedding error: {0}")]
    Embedding(String),

    /// Query and corpus vectors disagree on shape
    #[error("index error: {0}")]
    Index(String),

    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Corpus file could not be read or parsed
    #[error("corpus error: {path}: {reason}")]
    Corpus { path: String, reason: String },

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Errors at the boundary of a remote verdict provider.
///
/// Every variant is recoverable: the orchestrator reacts to any of them by
/// moving on to the next provider in its priority list.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Network failure (connection refused, DNS, TLS, timeout)
    #[error("network error: {0}")]
    Http(String),

    /// Non-2xx response from the remote API
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Rate limit or quota exhausted
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    /// The call succeeded but the payload is not a verdict
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The call succeeded but carried no content
    #[error("empty response from {0}")]
    EmptyResponse(String),

    /// Missing API key or invalid settings
    #[error("configuration error: {0}")]
    Config(String),
}

impl ProviderError {
    /// Classify a non-success HTTP response.
    ///
    /// 429 and bodies mentioning a quota are reported as [`ProviderError::QuotaExceeded`].
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 429 || body.to_lowercase().contains("quota") {
            Self::QuotaExceeded(body)
        } else {
            Self::Api { status, body }
        }
    }

    /// Whether this failure is a rate/quota limit.
    pub fn is_quota(&self) -> bool {
        matches!(self, Self::QuotaExceeded(_))
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

/// Result type alias for fact-check operations.
pub type Result<T> = std::result::Result<T, FactCheckError>;

/// Result type alias for provider calls.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
