//! History and export endpoints.
//!
//! GET /api/history?limit=N
//! GET /api/export/:id

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use scripture_check::StoredFactCheck;
use serde::Deserialize;

use super::error::ApiError;
use crate::server::app::AppState;

const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    limit: Option<usize>,
}

/// Most recent fact checks, newest first.
pub async fn history_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<StoredFactCheck>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);

    state.checker.history(limit).await.map(Json).map_err(|e| {
        tracing::error!(error = %e, "Error getting history");
        ApiError::internal()
    })
}

/// A single stored fact check as JSON.
pub async fn export_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StoredFactCheck>, ApiError> {
    match state.checker.export(id).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => Err(ApiError::not_found("Fact check not found")),
        Err(e) => {
            tracing::error!(id, error = %e, "Error exporting fact check");
            Err(ApiError::internal())
        }
    }
}
