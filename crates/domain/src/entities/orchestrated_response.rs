//! Unified pipeline output

use serde::{Deserialize, Serialize};

use super::VideoMetadata;
use crate::messages::GENERIC_FAILURE;

/// Playable clip attached to a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayableVideo {
    /// URL of the video file
    pub url: String,
    /// Playback start in seconds
    pub timestamp: f64,
    /// Descriptive record, `None` when the metadata lookup failed
    pub metadata: Option<VideoMetadata>,
}

/// The single value the pipeline produces for every query
///
/// `message` is always non-empty. `video` is present exactly when the search
/// stage matched a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestratedResponse {
    /// Text to show the user
    pub message: String,
    /// Clip to play, if any
    pub video: Option<PlayableVideo>,
}

impl OrchestratedResponse {
    /// Response without a playable result
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            video: None,
        }
    }

    /// Response with a playable clip
    pub fn with_video(message: impl Into<String>, video: PlayableVideo) -> Self {
        Self {
            message: message.into(),
            video: Some(video),
        }
    }

    /// Fixed apology for unexpected pipeline failures
    #[must_use]
    pub fn generic_failure() -> Self {
        Self::text(GENERIC_FAILURE)
    }

    /// Whether a clip is attached
    #[must_use]
    pub const fn has_video(&self) -> bool {
        self.video.is_some()
    }
}
