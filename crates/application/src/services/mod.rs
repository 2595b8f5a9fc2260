//! Application services
//!
//! Services orchestrate domain logic and coordinate between ports.

mod catalog_service;
mod health_service;
mod vibe_service;

pub use catalog_service::CatalogService;
pub use health_service::{HealthConfig, HealthReport, HealthService, ServiceHealth, VIDEO_SERVER};
pub use vibe_service::VibeService;
