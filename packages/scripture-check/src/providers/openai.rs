//! OpenAI chat-completions verdict provider.
//!
//! # Example
//!
//! ```rust,ignore
//! use scripture_check::providers::OpenAI;
//!
//! let openai = OpenAI::from_env()?.with_model("gpt-4o-mini");
//! let checker = FactChecker::builder(index).provider(openai).build();
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::security::ApiKey;
use crate::traits::provider::{Completion, VerdictProvider};
use crate::types::verdict::{ClaimType, Verdict};

use super::payload::parse_verdict_payload;
use super::prompts::format_verdict_prompt;

/// OpenAI-based verdict provider.
///
/// Defaults to gpt-3.5-turbo at temperature 0.3 with a 1000-token budget
/// for verdicts.
#[derive(Clone, Debug)]
pub struct OpenAI {
    client: Client,
    api_key: ApiKey,
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAI {
    /// Create a new OpenAI provider with the given API key.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            temperature: 0.3,
            max_tokens: 1000,
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> ProviderResult<Self> {
        Ok(Self::new(ApiKey::from_env("OPENAI_API_KEY")?))
    }

    /// Set the chat model (default: gpt-3.5-turbo).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the verdict sampling temperature (default: 0.3).
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Make a single-message chat completion request.
    async fn chat(&self, prompt: &str, max_tokens: u32, temperature: f32) -> ProviderResult<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), error_text));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedPayload(e.to_string()))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ProviderError::EmptyResponse("openai".into()))
    }
}

#[async_trait]
impl Completion for OpenAI {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> ProviderResult<String> {
        self.chat(prompt, max_tokens, 0.0).await
    }
}

#[async_trait]
impl VerdictProvider for OpenAI {
    fn name(&self) -> &str {
        "openai"
    }

    async fn produce(
        &self,
        claim: &str,
        claim_type: ClaimType,
        language: &str,
    ) -> ProviderResult<Verdict> {
        let prompt = format_verdict_prompt(claim, claim_type, language);
        let content = self.chat(&prompt, self.max_tokens, self.temperature).await?;
        debug!(model = %self.model, chars = content.len(), "OpenAI verdict received");
        parse_verdict_payload(&content)
    }
}

// Request/Response types

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}
