//! Video catalog adapter - Implements VideoCatalogPort over the video server catalog endpoints

use std::sync::Arc;

use application::{error::ApplicationError, ports::VideoCatalogPort};
use async_trait::async_trait;
use domain::{VideoId, VideoMetadata};
use integration_ridevibe::RideVibeApi;
use tracing::{debug, instrument};

use super::map_error;

/// Adapter for `/videos`, `/videos/{id}` and the status endpoint
pub struct VideoCatalogAdapter {
    client: Arc<dyn RideVibeApi>,
}

impl std::fmt::Debug for VideoCatalogAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoCatalogAdapter")
            .field("client", &"<RideVibeApi>")
            .finish()
    }
}

impl VideoCatalogAdapter {
    /// Create a new adapter
    #[must_use]
    pub fn new(client: Arc<dyn RideVibeApi>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VideoCatalogPort for VideoCatalogAdapter {
    #[instrument(skip(self), fields(video_id = %video_id))]
    async fn get_metadata(&self, video_id: &VideoId) -> Result<VideoMetadata, ApplicationError> {
        let metadata = self
            .client
            .get_video(video_id.as_str())
            .await
            .map_err(map_error)?;
        debug!(trail_name = ?metadata.trail_name(), "Metadata fetched");
        Ok(metadata)
    }

    #[instrument(skip(self))]
    async fn list_videos(&self) -> Result<Vec<VideoMetadata>, ApplicationError> {
        self.client.list_videos().await.map_err(map_error)
    }

    fn video_url(&self, video_id: &VideoId) -> Result<String, ApplicationError> {
        self.client
            .video_file_url(video_id.as_str())
            .map_err(map_error)
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
