//! RideVibe video server client
//!
//! HTTP client for the intent chat, semantic search and catalog endpoints.
//! Every call is a single attempt bounded by the configured timeout.

use std::time::Duration;

use async_trait::async_trait;
use domain::VideoMetadata;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    config::RideVibeConfig,
    error::RideVibeError,
    models::{ChatReply, ChatRequest, SearchHit, SearchRequest, ServerStatus},
};

/// Longest error body kept in `RideVibeError::HttpStatus`
const MAX_ERROR_BODY_LEN: usize = 256;

/// Operations offered by the video server
#[async_trait]
pub trait RideVibeApi: Send + Sync {
    /// Classify a message and get a conversational answer
    async fn chat(&self, message: &str) -> Result<ChatReply, RideVibeError>;

    /// Find the best-matching clip for a free-text query
    async fn search(&self, query: &str) -> Result<SearchHit, RideVibeError>;

    /// Fetch the metadata record of one video
    async fn get_video(&self, video_id: &str) -> Result<VideoMetadata, RideVibeError>;

    /// Fetch every metadata record in the catalog
    async fn list_videos(&self) -> Result<Vec<VideoMetadata>, RideVibeError>;

    /// URL of the playable video file; no request is made
    fn video_file_url(&self, video_id: &str) -> Result<String, RideVibeError>;

    /// Fetch the server's status document
    async fn server_status(&self) -> Result<ServerStatus, RideVibeError>;

    /// Whether the server answers its status endpoint successfully
    async fn is_healthy(&self) -> bool {
        self.server_status().await.is_ok()
    }
}

/// reqwest-backed video server client
#[derive(Debug, Clone)]
pub struct RideVibeClient {
    client: Client,
    base_url: Url,
    config: RideVibeConfig,
}

impl RideVibeClient {
    /// Create a client for the configured server
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: RideVibeConfig) -> Result<Self, RideVibeError> {
        config.validate()?;

        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| RideVibeError::ConfigurationError(format!("base_url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(RideVibeError::ConfigurationError(format!(
                "base_url cannot hold paths: {base_url}"
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| RideVibeError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Create a client for the default local server
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, RideVibeError> {
        Self::new(RideVibeConfig::default())
    }

    /// Configuration the client was built with
    #[must_use]
    pub const fn config(&self) -> &RideVibeConfig {
        &self.config
    }

    /// Build an endpoint URL from path segments, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, RideVibeError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RideVibeError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Map a transport-level reqwest error
    fn map_send_error(&self, err: &reqwest::Error) -> RideVibeError {
        if err.is_timeout() {
            RideVibeError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else if err.is_connect() {
            RideVibeError::ConnectionFailed(err.to_string())
        } else {
            RideVibeError::RequestFailed(err.to_string())
        }
    }

    /// Turn non-success statuses into errors
    async fn check_status(response: Response) -> Result<Response, RideVibeError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(RideVibeError::RateLimitExceeded);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(RideVibeError::NotFound(response.url().path().to_string()));
        }

        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY_LEN {
            let cut = (0..=MAX_ERROR_BODY_LEN)
                .rev()
                .find(|i| body.is_char_boundary(*i))
                .unwrap_or(0);
            body.truncate(cut);
        }
        Err(RideVibeError::HttpStatus {
            status: status.as_u16(),
            body,
        })
    }

    /// Check the status and decode a JSON body
    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, RideVibeError> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                self.map_send_error(&e)
            } else {
                RideVibeError::ParseError(e.to_string())
            }
        })?;
        serde_json::from_slice(&bytes).map_err(|e| RideVibeError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl RideVibeApi for RideVibeClient {
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    async fn chat(&self, message: &str) -> Result<ChatReply, RideVibeError> {
        let url = self.endpoint(&["gemini", "chat"])?;
        debug!(url = %url, "Classifying message");

        let response = self
            .client
            .post(url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let reply: ChatReply = self.read_json(response).await?;
        debug!(is_location = reply.is_location, "Message classified");
        Ok(reply)
    }

    #[instrument(skip(self, query), fields(query_len = query.len()))]
    async fn search(&self, query: &str) -> Result<SearchHit, RideVibeError> {
        let url = self.endpoint(&["search"])?;
        debug!(url = %url, "Searching videos");

        let response = self
            .client
            .post(url)
            .json(&SearchRequest::new(query, &self.config.search_options))
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let hit: SearchHit = self.read_json(response).await?;
        debug!(
            video_id = ?hit.video_id,
            start_sec = ?hit.start_sec,
            "Search completed"
        );
        Ok(hit)
    }

    #[instrument(skip(self))]
    async fn get_video(&self, video_id: &str) -> Result<VideoMetadata, RideVibeError> {
        let url = self.endpoint(&["videos", video_id])?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        self.read_json(response).await
    }

    #[instrument(skip(self))]
    async fn list_videos(&self) -> Result<Vec<VideoMetadata>, RideVibeError> {
        let url = self.endpoint(&["videos"])?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        // Entries that are not JSON objects are skipped, not fatal
        let entries: Vec<serde_json::Value> = self.read_json(response).await?;
        let total = entries.len();
        let videos: Vec<VideoMetadata> = entries
            .into_iter()
            .filter_map(VideoMetadata::from_value)
            .collect();
        if videos.len() < total {
            warn!(skipped = total - videos.len(), "Ignoring catalog entries that are not records");
        }
        debug!(count = videos.len(), "Catalog listed");
        Ok(videos)
    }

    fn video_file_url(&self, video_id: &str) -> Result<String, RideVibeError> {
        if video_id.trim().is_empty() {
            return Err(RideVibeError::InvalidUrl(
                "video id must not be empty".to_string(),
            ));
        }
        Ok(self.endpoint(&["videos", video_id, "file"])?.to_string())
    }

    #[instrument(skip(self))]
    async fn server_status(&self) -> Result<ServerStatus, RideVibeError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status: ServerStatus = self.read_json(response).await.inspect_err(|e| {
            warn!(error = %e, "Video server status check failed");
        })?;
        Ok(status)
    }
}
