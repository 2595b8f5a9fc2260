//! HTTP request handlers

pub mod health;
pub mod vibe;
pub mod videos;
