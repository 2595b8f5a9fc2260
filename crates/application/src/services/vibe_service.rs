//! Vibe service - query orchestration and response assembly
//!
//! Runs one query through the pipeline:
//!
//! ```text
//! Classifying ──┬─ conversational ──────────────────────────────► Assembled
//!               └─ location ─► Searching ─┬─ no id ────────────► Assembled
//!                                         └─ id ─► FetchingMetadata ─► Assembled
//! ```
//!
//! Calls are strictly sequential and each stage degrades on its own, so the
//! caller always gets an [`OrchestratedResponse`].

use std::{fmt, panic::AssertUnwindSafe, sync::Arc};

use domain::{
    ClassificationResult, OrchestratedResponse, PlayableVideo, Query, SearchResult, VideoId,
    VideoMetadata,
};
use futures::FutureExt;
use tracing::{debug, error, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{IntentClassifierPort, VideoCatalogPort, VideoSearchPort},
};

/// Orchestrates classification, search and metadata lookup for one query
pub struct VibeService {
    classifier: Arc<dyn IntentClassifierPort>,
    search: Arc<dyn VideoSearchPort>,
    catalog: Arc<dyn VideoCatalogPort>,
}

impl fmt::Debug for VibeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VibeService")
            .field("classifier", &"<IntentClassifierPort>")
            .field("search", &"<VideoSearchPort>")
            .field("catalog", &"<VideoCatalogPort>")
            .finish()
    }
}

impl VibeService {
    /// Create a new vibe service
    pub fn new(
        classifier: Arc<dyn IntentClassifierPort>,
        search: Arc<dyn VideoSearchPort>,
        catalog: Arc<dyn VideoCatalogPort>,
    ) -> Self {
        Self {
            classifier,
            search,
            catalog,
        }
    }

    /// Answer a query with a message and, when one matched, a playable clip
    ///
    /// Never fails. Errors and panics escaping the stages become the generic
    /// apology.
    #[instrument(skip(self, query), fields(query_len = query.char_count()))]
    pub async fn respond(&self, query: &Query) -> OrchestratedResponse {
        match AssertUnwindSafe(self.run(query)).catch_unwind().await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                error!(error = %e, "Vibe pipeline failed");
                OrchestratedResponse::generic_failure()
            },
            Err(_) => {
                error!("Vibe pipeline panicked");
                OrchestratedResponse::generic_failure()
            },
        }
    }

    async fn run(&self, query: &Query) -> Result<OrchestratedResponse, ApplicationError> {
        let classification = self.classify(query).await;
        if !classification.is_location {
            debug!("Answering conversationally");
            return Ok(OrchestratedResponse::text(classification.response));
        }

        let found = self.search_videos(query).await;
        let Some(video_id) = found.video_id else {
            return Ok(OrchestratedResponse::text(found.message));
        };

        let metadata = self.fetch_metadata(&video_id).await;
        let url = self.catalog.video_url(&video_id)?;

        Ok(OrchestratedResponse::with_video(
            found.message,
            PlayableVideo {
                url,
                timestamp: found.start_seconds,
                metadata,
            },
        ))
    }

    /// Classify the query, routing to search whenever the classifier fails
    async fn classify(&self, query: &Query) -> ClassificationResult {
        match self.classifier.classify(query).await {
            Ok(classification) if classification.is_usable() => {
                debug!(is_location = classification.is_location, "Query classified");
                classification
            },
            Ok(_) => {
                warn!("Classifier returned an empty answer, falling back to search");
                ClassificationResult::fallback()
            },
            Err(e) => {
                warn!(error = %e, "Classifier failed, falling back to search");
                ClassificationResult::fallback()
            },
        }
    }

    /// Search for a clip; backend rejections read as "no match"
    async fn search_videos(&self, query: &Query) -> SearchResult {
        match self.search.search(query).await {
            Ok(Some(found)) => {
                debug!(video_id = %found.video_id, "Search matched");
                SearchResult::found(found)
            },
            Ok(None) => {
                debug!("Search matched nothing");
                SearchResult::no_match()
            },
            Err(e) if e.is_backend_rejection() => {
                warn!(error = %e, "Search rejected by backend");
                SearchResult::no_match()
            },
            Err(e) if e.is_unavailable() => {
                warn!(error = %e, "Search service unavailable");
                SearchResult::search_error()
            },
            Err(e) => {
                error!(error = %e, "Search failed");
                SearchResult::search_error()
            },
        }
    }

    async fn fetch_metadata(&self, video_id: &VideoId) -> Option<VideoMetadata> {
        self.catalog
            .get_metadata(video_id)
            .await
            .inspect_err(|e| warn!(error = %e, video_id = %video_id, "Metadata unavailable"))
            .ok()
    }
}
