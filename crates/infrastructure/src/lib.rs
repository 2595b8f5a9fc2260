//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports over the RideVibe video server client,
//! loads the application configuration and sets up logging.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ConfigError, LogFormat, LoggingConfig, ServerConfig};
pub use telemetry::{TelemetryError, init_tracing};
