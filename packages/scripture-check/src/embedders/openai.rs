//! OpenAI embeddings.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FactCheckError, Result};
use crate::security::ApiKey;
use crate::traits::embedder::Embedder;

/// Most inputs the embeddings endpoint accepts in one request.
pub const DEFAULT_BATCH_SIZE: usize = 2048;

/// Embeds text with `text-embedding-3-small` (1536 dimensions).
///
/// Batches larger than the batch size go out as several requests; the
/// returned vectors stay aligned with the inputs.
#[derive(Clone, Debug)]
pub struct OpenAIEmbedder {
    client: Client,
    api_key: ApiKey,
    model: String,
    base_url: String,
    batch_size: usize,
}

impl OpenAIEmbedder {
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: "text-embedding-3-small".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let key = ApiKey::from_env("OPENAI_API_KEY")
            .map_err(|e| FactCheckError::Config(e.to_string()))?;
        Ok(Self::new(key))
    }

    /// Set the embedding model (default: text-embedding-3-small).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the inputs sent per request (default: 2048, minimum 1).
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    async fn embed_chunk(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let request = EmbeddingRequest {
            model: self.model.clone(),
            input: texts.iter().map(|t| t.to_string()).collect(),
        };

        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| FactCheckError::Embedding(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(FactCheckError::Embedding(format!(
                "OpenAI embedding error: {}",
                error_text
            )));
        }

        let mut embed_response: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| FactCheckError::Embedding(e.to_string()))?;

        // The API reports each vector's input position; don't rely on array order
        embed_response.data.sort_by_key(|d| d.index);

        if embed_response.data.len() != texts.len() {
            return Err(FactCheckError::Embedding(format!(
                "OpenAI returned {} embeddings for {} inputs",
                embed_response.data.len(),
                texts.len()
            )));
        }

        Ok(embed_response
            .data
            .into_iter()
            .map(|d| d.embedding)
            .collect())
    }
}

#[async_trait]
impl Embedder for OpenAIEmbedder {
    fn name(&self) -> &str {
        "openai"
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());

        for (i, chunk) in texts.chunks(self.batch_size).enumerate() {
            debug!(chunk = i, inputs = chunk.len(), "Embedding chunk");
            embeddings.extend(self.embed_chunk(chunk).await?);
        }

        Ok(embeddings)
    }
}

#[derive(Serialize)]
struct EmbeddingRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;

    #[test]
    fn test_embedder_builder() {
        let embedder = OpenAIEmbedder::new("sk-test")
            .with_model("text-embedding-3-large")
            .with_base_url("https://custom.api.com");
        assert_eq!(embedder.model, "text-embedding-3-large");
        assert_eq!(embedder.base_url, "https://custom.api.com");
        assert_eq!(embedder.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(OpenAIEmbedder::new("sk").with_batch_size(0).batch_size, 1);
    }

    #[tokio::test]
    async fn test_empty_batch_makes_no_request() {
        let embedder = OpenAIEmbedder::new("sk-test").with_base_url("http://127.0.0.1:1");
        assert!(embedder.embed_batch(&[]).await.unwrap().is_empty());
    }

    /// Local `/embeddings` endpoint that rejects oversized requests and
    /// answers each input `"text N"` with `[N]`, in reverse order.
    async fn spawn_embeddings_server(max_inputs: usize) -> (String, Arc<AtomicUsize>) {
        let requests = Arc::new(AtomicUsize::new(0));
        let counter = requests.clone();

        let app = Router::new().route(
            "/embeddings",
            post(move |Json(body): Json<serde_json::Value>| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    let inputs = body["input"].as_array().cloned().unwrap_or_default();
                    if inputs.len() > max_inputs {
                        let error = json!({"error": {"message": "'$.input' is invalid"}});
                        return (StatusCode::BAD_REQUEST, Json(error));
                    }

                    let data: Vec<_> = inputs
                        .iter()
                        .enumerate()
                        .rev()
                        .map(|(index, input)| {
                            let n: f32 = input
                                .as_str()
                                .and_then(|s| s.strip_prefix("text "))
                                .and_then(|n| n.parse().ok())
                                .unwrap_or(-1.0);
                            json!({"index": index, "embedding": [n]})
                        })
                        .collect();
                    (StatusCode::OK, Json(json!({"data": data})))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), requests)
    }

    fn numbered_texts(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("text {}", i)).collect()
    }

    #[tokio::test]
    async fn test_large_batch_split_across_requests() {
        let (base_url, requests) = spawn_embeddings_server(3).await;
        let embedder = OpenAIEmbedder::new("sk-test")
            .with_base_url(base_url)
            .with_batch_size(3);

        let texts = numbered_texts(7);
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let embeddings = embedder.embed_batch(&refs).await.unwrap();

        assert_eq!(requests.load(Ordering::SeqCst), 3);
        assert_eq!(embeddings.len(), 7);
        for (i, embedding) in embeddings.iter().enumerate() {
            assert_eq!(embedding, &vec![i as f32]);
        }
    }

    #[tokio::test]
    async fn test_default_batch_size_stays_under_input_limit() {
        let (base_url, requests) = spawn_embeddings_server(DEFAULT_BATCH_SIZE).await;
        let embedder = OpenAIEmbedder::new("sk-test").with_base_url(base_url);

        let texts = numbered_texts(DEFAULT_BATCH_SIZE * 2 + 10);
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let embeddings = embedder.embed_batch(&refs).await.unwrap();

        assert_eq!(requests.load(Ordering::SeqCst), 3);
        assert_eq!(embeddings.len(), texts.len());
        assert_eq!(embeddings[DEFAULT_BATCH_SIZE + 1], vec![(DEFAULT_BATCH_SIZE + 1) as f32]);
    }

    #[tokio::test]
    async fn test_rejected_chunk_is_embedding_error() {
        let (base_url, _) = spawn_embeddings_server(2).await;
        let embedder = OpenAIEmbedder::new("sk-test")
            .with_base_url(base_url)
            .with_batch_size(5);

        let err = embedder.embed_batch(&["text 0", "text 1", "text 2"]).await.unwrap_err();
        assert!(matches!(err, FactCheckError::Embedding(_)));
    }
}
