//! Vibe query handler

use axum::{Json, extract::State};
use domain::{OrchestratedResponse, Query};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Vibe request body
#[derive(Debug, Deserialize)]
pub struct VibeRequest {
    /// Free-text query
    pub query: String,
}

/// Run a query through the pipeline
///
/// Only an empty query is rejected; every other outcome, including backend
/// failures, is a 200 with a user-facing message.
#[instrument(skip(state, request), fields(query_len = request.query.len()))]
pub async fn vibe(
    State(state): State<AppState>,
    Json(request): Json<VibeRequest>,
) -> Result<Json<OrchestratedResponse>, ApiError> {
    let query = Query::new(request.query)?;
    Ok(Json(state.vibe_service.respond(&query).await))
}
