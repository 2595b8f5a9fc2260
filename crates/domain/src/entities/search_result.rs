//! Search stage outcome

use serde::{Deserialize, Serialize};

use crate::{
    messages::{self, DEFAULT_TRAIL_NAME, NO_MATCH, SEARCH_ERROR},
    value_objects::VideoId,
};

/// Best-matching clip reported by the semantic search backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMatch {
    /// Matched video
    pub video_id: VideoId,
    /// Trail name, when the backend knows it
    pub trail_name: Option<String>,
    /// Start of the matched segment in seconds
    pub start_seconds: Option<f64>,
}

impl VideoMatch {
    /// Create a match for a video without extra details
    #[must_use]
    pub const fn new(video_id: VideoId) -> Self {
        Self {
            video_id,
            trail_name: None,
            start_seconds: None,
        }
    }

    /// Set the trail name
    #[must_use]
    pub fn with_trail_name(mut self, name: impl Into<String>) -> Self {
        self.trail_name = Some(name.into());
        self
    }

    /// Set the segment start offset
    #[must_use]
    pub const fn with_start_seconds(mut self, seconds: f64) -> Self {
        self.start_seconds = Some(seconds);
        self
    }
}

/// Normalized result of the search stage
///
/// `video_id == None` means no playable match. `message` is always set, so
/// callers never have to invent failure text for this stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Matched video, if any
    pub video_id: Option<VideoId>,
    /// Trail name of the match
    pub trail_name: Option<String>,
    /// Playback start in seconds (0 without a match)
    pub start_seconds: f64,
    /// User-facing message for this outcome
    pub message: String,
}

impl SearchResult {
    /// Result for a matched clip
    #[must_use]
    pub fn found(found: VideoMatch) -> Self {
        let start_seconds = found.start_seconds.unwrap_or(0.0);
        let message = messages::clip_found(
            found.trail_name.as_deref().unwrap_or(DEFAULT_TRAIL_NAME),
            start_seconds,
        );
        Self {
            video_id: Some(found.video_id),
            trail_name: found.trail_name,
            start_seconds,
            message,
        }
    }

    /// Result when the backend answered but matched nothing
    #[must_use]
    pub fn no_match() -> Self {
        Self::empty(NO_MATCH)
    }

    /// Result when the backend could not be searched
    #[must_use]
    pub fn search_error() -> Self {
        Self::empty(SEARCH_ERROR)
    }

    fn empty(message: &str) -> Self {
        Self {
            video_id: None,
            trail_name: None,
            start_seconds: 0.0,
            message: message.to_string(),
        }
    }

    /// Whether a playable video was found
    #[must_use]
    pub const fn has_video(&self) -> bool {
        self.video_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v42() -> VideoId {
        VideoId::new("v42").unwrap()
    }

    #[test]
    fn found_formats_message() {
        let result = SearchResult::found(
            VideoMatch::new(v42())
                .with_trail_name("Canyon Run")
                .with_start_seconds(83.0),
        );
        assert!(result.has_video());
        assert!(result.message.contains("**Canyon Run**"));
        assert!(result.message.contains("1:23"));
        assert!((result.start_seconds - 83.0).abs() < f64::EPSILON);
    }

    #[test]
    fn found_without_offset_starts_at_zero() {
        let result = SearchResult::found(VideoMatch::new(v42()).with_trail_name("Ridge"));
        assert!(result.start_seconds.abs() < f64::EPSILON);
        assert!(result.message.ends_with("Jumping to 0:00."));
    }

    #[test]
    fn found_without_name_uses_default() {
        let result = SearchResult::found(VideoMatch::new(v42()));
        assert!(result.message.contains("**Mountain Bike Trail**"));
        assert!(result.trail_name.is_none());
    }

    #[test]
    fn empty_outcomes_carry_apologies() {
        let none = SearchResult::no_match();
        assert!(!none.has_video());
        assert_eq!(none.message, NO_MATCH);

        let err = SearchResult::search_error();
        assert!(!err.has_video());
        assert_eq!(err.message, SEARCH_ERROR);
        assert!(err.start_seconds.abs() < f64::EPSILON);
    }
}
