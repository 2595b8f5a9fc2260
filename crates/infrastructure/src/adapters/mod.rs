//! Adapters implementing application ports
//!
//! All three pipeline ports are served by the RideVibe video server, so the
//! adapters share one [`RideVibeApi`] client.

mod intent_classifier_adapter;
mod video_catalog_adapter;
mod video_search_adapter;

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{IntentClassifierPort, VideoCatalogPort, VideoSearchPort},
};
use integration_ridevibe::{RideVibeApi, RideVibeClient, RideVibeConfig, RideVibeError};

pub use intent_classifier_adapter::IntentClassifierAdapter;
pub use video_catalog_adapter::VideoCatalogAdapter;
pub use video_search_adapter::VideoSearchAdapter;

/// Map a video server client error to an application error
///
/// Transport failures and timeouts become `ServiceUnavailable`; answered
/// requests with a non-success status become `ExternalService` or `NotFound`.
pub(crate) fn map_error(err: RideVibeError) -> ApplicationError {
    match err {
        RideVibeError::ConnectionFailed(_)
        | RideVibeError::Timeout { .. }
        | RideVibeError::RequestFailed(_) => ApplicationError::ServiceUnavailable(err.to_string()),
        RideVibeError::HttpStatus { .. } | RideVibeError::RateLimitExceeded => {
            ApplicationError::ExternalService(err.to_string())
        },
        RideVibeError::NotFound(resource) => ApplicationError::NotFound(resource),
        RideVibeError::ParseError(e) => ApplicationError::InvalidResponse(e),
        RideVibeError::InvalidUrl(e) => ApplicationError::Internal(e),
        RideVibeError::ConfigurationError(e) => ApplicationError::Configuration(e),
    }
}

/// The pipeline ports wired to one video server
#[derive(Clone)]
pub struct VideoServerAdapters {
    /// Intent classification
    pub classifier: Arc<dyn IntentClassifierPort>,
    /// Semantic search
    pub search: Arc<dyn VideoSearchPort>,
    /// Metadata, listing and playback URLs
    pub catalog: Arc<dyn VideoCatalogPort>,
}

impl std::fmt::Debug for VideoServerAdapters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoServerAdapters").finish_non_exhaustive()
    }
}

impl VideoServerAdapters {
    /// Build a client from configuration and wire every port to it
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn from_config(config: RideVibeConfig) -> Result<Self, ApplicationError> {
        let client = RideVibeClient::new(config).map_err(map_error)?;
        Ok(Self::from_client(Arc::new(client)))
    }

    /// Wire every port to an existing client
    #[must_use]
    pub fn from_client(client: Arc<dyn RideVibeApi>) -> Self {
        Self {
            classifier: Arc::new(IntentClassifierAdapter::new(Arc::clone(&client))),
            search: Arc::new(VideoSearchAdapter::new(Arc::clone(&client))),
            catalog: Arc::new(VideoCatalogAdapter::new(client)),
        }
    }
}
