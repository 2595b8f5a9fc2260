//! Video catalog handlers

use axum::{
    Json,
    extract::{Path, State},
};
use domain::{VideoId, VideoMetadata};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// List the catalog; an unreachable catalog lists as empty
pub async fn list_videos(State(state): State<AppState>) -> Json<Vec<VideoMetadata>> {
    Json(state.catalog_service.list_videos().await)
}

/// Metadata of one video
#[instrument(skip(state))]
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VideoMetadata>, ApiError> {
    let video_id = VideoId::new(id)?;
    state
        .catalog_service
        .video(&video_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Video {video_id}")))
}
