//! Test harness: an in-process router over the sample corpus.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use scripture_check::{
    corpus::sample_verses, testing::MockProvider, CorpusIndex, FactChecker, MemoryStore,
};
use server_core::server::build_app;
use tower::ServiceExt;

pub struct TestHarness {
    pub app: Router,
    pub store: Arc<MemoryStore>,
}

impl TestHarness {
    /// Offline checker: keyword index, no providers.
    pub fn offline() -> Self {
        Self::with_providers(Vec::new())
    }

    pub fn with_providers(providers: Vec<MockProvider>) -> Self {
        let store = Arc::new(MemoryStore::new());
        let mut builder = FactChecker::builder(Arc::new(CorpusIndex::keyword_only(sample_verses())))
            .store(store.clone());
        for provider in providers {
            builder = builder.provider(provider);
        }

        Self {
            app: build_app(Arc::new(builder.build())),
            store,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.post_raw(uri, "application/json", body.to_string()).await
    }

    /// POST an arbitrary body, for requests that are not valid JSON.
    pub async fn post_raw(
        &self,
        uri: &str,
        content_type: &str,
        body: impl Into<String>,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body.into()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }
}
