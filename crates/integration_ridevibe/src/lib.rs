#![forbid(unsafe_code)]
//! RideVibe video server integration
//!
//! Client for the video server that fronts the two backend services the
//! vibe pipeline depends on:
//!
//! - `POST /gemini/chat`: intent classification with a conversational answer
//! - `POST /search`: semantic search over indexed trail videos
//! - `GET /videos`, `GET /videos/{id}`: the video catalog
//! - `GET /videos/{id}/file`: video playback (only the URL is built here)
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_ridevibe::{RideVibeApi, RideVibeClient, RideVibeConfig};
//!
//! let client = RideVibeClient::new(RideVibeConfig::default())?;
//! let hit = client.search("moody forest ride with fog and roots").await?;
//! if let Some(id) = hit.video_id {
//!     println!("{}", client.video_file_url(&id)?);
//! }
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{RideVibeApi, RideVibeClient};
pub use config::RideVibeConfig;
pub use error::RideVibeError;
pub use models::{ChatReply, ChatRequest, SearchHit, SearchRequest, ServerStatus};
