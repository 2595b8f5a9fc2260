//! Wire models for the video server API

use serde::{Deserialize, Serialize};

/// Body of `POST /gemini/chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Reply of `POST /gemini/chat`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    /// Whether the message asks for a place or trail to ride
    #[serde(rename = "isLocation")]
    pub is_location: bool,
    /// Conversational answer
    pub response: String,
}

/// Body of `POST /search`
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'a [String]>,
}

impl<'a> SearchRequest<'a> {
    /// Build a search body, leaving `options` out when none are configured
    #[must_use]
    pub fn new(query: &'a str, options: &'a [String]) -> Self {
        Self {
            query,
            options: (!options.is_empty()).then_some(options),
        }
    }
}

/// Reply of `POST /search`
///
/// The server answers `{}` when nothing matched, so every field is optional.
/// Segment end and relevance score are not used and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub trail_name: Option<String>,
    /// Segment start in seconds
    #[serde(default)]
    pub start_sec: Option<f64>,
}

impl SearchHit {
    /// Whether the hit names a video
    #[must_use]
    pub fn has_video(&self) -> bool {
        self.video_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty())
    }
}

/// Reply of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerStatus {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}
