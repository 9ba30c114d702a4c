//! Fact-check endpoint.
//!
//! POST /api/fact-check  `{"claim": "...", "language": "en"}`

use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use scripture_check::{Claim, FactCheckRecord};
use serde::Deserialize;

use super::error::ApiError;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct FactCheckRequest {
    #[serde(default)]
    pub claim: String,

    #[serde(default)]
    pub language: Option<String>,
}

/// Run one claim through the pipeline and return the full record.
///
/// A blank claim or an unreadable body is rejected with 400; anything else
/// always answers 200 with a complete record.
pub async fn fact_check_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<FactCheckRequest>, JsonRejection>,
) -> Result<Json<FactCheckRecord>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let text = request.claim.trim();
    if text.is_empty() {
        return Err(ApiError::bad_request("Claim is required"));
    }

    let mut claim = Claim::new(text);
    if let Some(language) = request.language.filter(|l| !l.trim().is_empty()) {
        claim = claim.with_language(language);
    }

    Ok(Json(state.checker.check(&claim).await))
}
