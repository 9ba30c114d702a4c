//! Google Gemini verdict provider.
//!
//! Uses the `generateContent` REST endpoint with the scholar prompt and
//! conservative sampling (temperature 0.1, top-p 0.8, top-k 40).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::security::ApiKey;
use crate::traits::provider::{Completion, VerdictProvider};
use crate::types::verdict::{ClaimType, Verdict};

use super::payload::parse_verdict_payload;
use super::prompts::format_scholar_prompt;

/// Gemini-based verdict provider.
#[derive(Clone, Debug)]
pub struct Gemini {
    client: Client,
    api_key: ApiKey,
    model: String,
    base_url: String,
    generation: GenerationConfig,
}

impl Gemini {
    /// Create a new Gemini provider with the given API key.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            generation: GenerationConfig {
                temperature: 0.1,
                max_output_tokens: 2000,
                top_p: 0.8,
                top_k: 40,
            },
        }
    }

    /// Create from environment variable `GOOGLE_API_KEY`.
    pub fn from_env() -> ProviderResult<Self> {
        Ok(Self::new(ApiKey::from_env("GOOGLE_API_KEY")?))
    }

    /// Set the model (default: gemini-1.5-flash).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str, generation: &GenerationConfig) -> ProviderResult<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: generation.clone(),
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", self.api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), error_text));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedPayload(e.to_string()))?;

        let text = body.text();
        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse("gemini".into()));
        }
        Ok(text)
    }
}

#[async_trait]
impl Completion for Gemini {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> ProviderResult<String> {
        let generation = GenerationConfig {
            temperature: 0.0,
            max_output_tokens: max_tokens,
            ..self.generation.clone()
        };
        self.generate(prompt, &generation).await
    }
}

#[async_trait]
impl VerdictProvider for Gemini {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn produce(
        &self,
        claim: &str,
        claim_type: ClaimType,
        language: &str,
    ) -> ProviderResult<Verdict> {
        let prompt = format_scholar_prompt(claim, claim_type, language);
        let text = self.generate(&prompt, &self.generation).await?;
        debug!(model = %self.model, chars = text.len(), "Gemini verdict received");
        parse_verdict_payload(&text)
    }
}

// Request/Response types

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    top_p: f32,
    top_k: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}
