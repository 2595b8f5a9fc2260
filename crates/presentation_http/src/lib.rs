//! RideVibe HTTP presentation layer
//!
//! This crate exposes the vibe pipeline and the video catalog over HTTP.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_app, create_router};
pub use state::AppState;
