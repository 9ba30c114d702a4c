use axum::{extract::Extension, Json};
use scripture_check::RetrievalMode;
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    mode: String,
    providers: Vec<String>,
    corpus: CorpusHealth,
}

#[derive(Serialize)]
pub struct CorpusHealth {
    verses: usize,
    retrieval: RetrievalMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    dimension: Option<usize>,
}

/// Health check endpoint
///
/// Reports the provider cascade and whether the corpus index can answer
/// with vector search or only keyword matching.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    let checker = &state.checker;
    let index = checker.index();

    let corpus = CorpusHealth {
        verses: index.len(),
        retrieval: if index.has_embeddings() {
            RetrievalMode::Vector
        } else {
            RetrievalMode::Keyword
        },
        dimension: index.has_embeddings().then(|| index.dimension()),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        mode: if checker.is_offline() { "offline" } else { "online" }.to_string(),
        providers: checker
            .provider_names()
            .into_iter()
            .map(String::from)
            .collect(),
        corpus,
    })
}
