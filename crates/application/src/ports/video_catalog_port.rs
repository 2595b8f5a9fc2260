//! Video catalog port
//!
//! Metadata lookup, catalog listing and playback URLs for indexed videos.

use async_trait::async_trait;
use domain::{VideoId, VideoMetadata};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the video catalog held by the video server
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VideoCatalogPort: Send + Sync {
    /// Fetch the metadata record of one video
    async fn get_metadata(&self, video_id: &VideoId) -> Result<VideoMetadata, ApplicationError>;

    /// Fetch every record in the catalog
    async fn list_videos(&self) -> Result<Vec<VideoMetadata>, ApplicationError>;

    /// Build the playback URL of a video; performs no I/O
    fn video_url(&self, video_id: &VideoId) -> Result<String, ApplicationError>;

    /// Check if the video server is reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn VideoCatalogPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn VideoCatalogPort>();
    }
}
