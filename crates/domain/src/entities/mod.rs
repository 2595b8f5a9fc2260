//! Entities produced and consumed by the vibe query pipeline
//!
//! All of them are per-query values: created for one pipeline run and
//! discarded afterwards.

mod classification;
mod orchestrated_response;
mod search_result;
mod video_metadata;

pub use classification::ClassificationResult;
pub use orchestrated_response::{OrchestratedResponse, PlayableVideo};
pub use search_result::{SearchResult, VideoMatch};
pub use video_metadata::VideoMetadata;
