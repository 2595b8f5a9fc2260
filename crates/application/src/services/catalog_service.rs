//! Catalog service - gallery listing and single-video lookup

use std::{fmt, sync::Arc};

use domain::{VideoId, VideoMetadata};
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::VideoCatalogPort};

/// Read access to the indexed video catalog
///
/// Listing degrades to an empty catalog; lookups report absence as `None`.
pub struct CatalogService {
    catalog: Arc<dyn VideoCatalogPort>,
}

impl fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService")
            .field("catalog", &"<VideoCatalogPort>")
            .finish()
    }
}

impl CatalogService {
    /// Create a new catalog service
    pub fn new(catalog: Arc<dyn VideoCatalogPort>) -> Self {
        Self { catalog }
    }

    /// Every indexed video, or an empty list when the catalog is unreachable
    #[instrument(skip(self))]
    pub async fn list_videos(&self) -> Vec<VideoMetadata> {
        match self.catalog.list_videos().await {
            Ok(videos) => {
                debug!(count = videos.len(), "Catalog loaded");
                videos
            },
            Err(e) => {
                warn!(error = %e, "Catalog unavailable, returning empty list");
                Vec::new()
            },
        }
    }

    /// Metadata of one video, `None` on any failure
    #[instrument(skip(self), fields(video_id = %video_id))]
    pub async fn video(&self, video_id: &VideoId) -> Option<VideoMetadata> {
        self.catalog
            .get_metadata(video_id)
            .await
            .inspect_err(|e| debug!(error = %e, "Video lookup failed"))
            .ok()
    }

    /// Playback URL of a video
    pub fn video_url(&self, video_id: &VideoId) -> Result<String, ApplicationError> {
        self.catalog.video_url(video_id)
    }

    /// Whether the video server answers its status probe
    pub async fn is_available(&self) -> bool {
        self.catalog.is_available().await
    }
}
