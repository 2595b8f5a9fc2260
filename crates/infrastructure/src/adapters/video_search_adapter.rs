//! Video search adapter - Implements VideoSearchPort over the semantic search endpoint

use std::sync::Arc;

use application::{error::ApplicationError, ports::VideoSearchPort};
use async_trait::async_trait;
use domain::{Query, VideoId, VideoMatch};
use integration_ridevibe::{RideVibeApi, SearchHit};
use tracing::{debug, instrument};

use super::map_error;

/// Adapter for the `/search` endpoint
pub struct VideoSearchAdapter {
    client: Arc<dyn RideVibeApi>,
}

impl std::fmt::Debug for VideoSearchAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoSearchAdapter")
            .field("client", &"<RideVibeApi>")
            .finish()
    }
}

impl VideoSearchAdapter {
    /// Create a new adapter
    #[must_use]
    pub fn new(client: Arc<dyn RideVibeApi>) -> Self {
        Self { client }
    }

    /// Convert a search hit, treating an absent or blank id as no match
    fn to_match(hit: SearchHit) -> Option<VideoMatch> {
        let video_id = VideoId::from_optional(hit.video_id)?;
        Some(VideoMatch {
            video_id,
            trail_name: hit.trail_name.filter(|name| !name.trim().is_empty()),
            start_seconds: hit.start_sec,
        })
    }
}

#[async_trait]
impl VideoSearchPort for VideoSearchAdapter {
    #[instrument(skip(self, query), fields(query_len = query.char_count()))]
    async fn search(&self, query: &Query) -> Result<Option<VideoMatch>, ApplicationError> {
        let hit = self.client.search(query.as_str()).await.map_err(map_error)?;
        let found = Self::to_match(hit);
        debug!(matched = found.is_some(), "Search finished");
        Ok(found)
    }
}
