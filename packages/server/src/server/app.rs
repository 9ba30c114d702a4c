//! Application setup and server configuration.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use scripture_check::{
    corpus::load_corpus_or_samples, ClaimClassifier, CorpusIndex, Embedder, FactChecker,
    Gemini, HashingEmbedder, KeywordClassifier, OpenAI, OpenAIEmbedder, RemoteClassifier,
    SqliteStore, VerdictProvider,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ClassifierKind, Config, EmbedderKind};
use crate::server::routes::{
    export_handler, fact_check_handler, health_handler, history_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<FactChecker>,
}

/// Build the fact checker from configuration.
///
/// Loads the corpus (falling back to the built-in samples), embeds it, wires
/// providers in priority order (OpenAI, then Gemini) and opens the store.
pub async fn build_fact_checker(config: &Config) -> Result<FactChecker> {
    let verses = load_corpus_or_samples(Path::new(&config.corpus_dir));
    tracing::info!(verses = verses.len(), dir = %config.corpus_dir, "Corpus loaded");

    let embedder: Arc<dyn Embedder> = match (config.embedder, &config.openai_api_key) {
        (EmbedderKind::OpenAI, Some(key)) => Arc::new(OpenAIEmbedder::new(key.as_str())),
        (EmbedderKind::OpenAI, None) => {
            tracing::warn!("EMBEDDER=openai but OPENAI_API_KEY is not set, using hashing embedder");
            Arc::new(HashingEmbedder::default())
        }
        (EmbedderKind::Hashing, _) => Arc::new(HashingEmbedder::default()),
    };

    let index = match CorpusIndex::build(verses.clone(), embedder).await {
        Ok(index) => index,
        Err(e) => {
            tracing::warn!(error = %e, "Could not embed corpus, searches will use keyword matching");
            CorpusIndex::keyword_only(verses)
        }
    };

    let mut providers: Vec<Box<dyn VerdictProvider>> = Vec::new();
    if let Some(key) = &config.openai_api_key {
        providers.push(Box::new(OpenAI::new(key.as_str())));
    }
    if let Some(key) = &config.google_api_key {
        providers.push(Box::new(Gemini::new(key.as_str())));
    }

    let classifier: Box<dyn ClaimClassifier> =
        match (config.classifier, &config.openai_api_key) {
            (ClassifierKind::Remote, Some(key)) => {
                Box::new(RemoteClassifier::new(OpenAI::new(key.as_str())))
            }
            (ClassifierKind::Remote, None) => {
                tracing::warn!("CLASSIFIER=remote but OPENAI_API_KEY is not set, using keywords");
                Box::new(KeywordClassifier::new())
            }
            (ClassifierKind::Local, _) => Box::new(KeywordClassifier::new()),
        };

    let store = SqliteStore::new(&config.database_url)
        .await
        .context("Failed to open fact-check database")?;

    let checker = FactChecker::builder(Arc::new(index))
        .boxed_classifier(classifier)
        .providers(providers)
        .store(Arc::new(store))
        .build();

    if checker.is_offline() {
        tracing::info!("No provider keys configured, running in offline mode");
    } else {
        tracing::info!(providers = ?checker.provider_names(), "Verdict providers configured");
    }

    Ok(checker)
}

/// Build the Axum application router
pub fn build_app(checker: Arc<FactChecker>) -> Router {
    let app_state = AppState { checker };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/fact-check", post(fact_check_handler))
        .route("/api/history", get(history_handler))
        .route("/api/export/:id", get(export_handler))
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
