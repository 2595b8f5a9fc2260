//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `logging`: log filter and format
//!
//! The video server section reuses [`RideVibeConfig`] and the health section
//! reuses [`HealthConfig`].

mod logging;
mod server;

use std::{collections::HashMap, path::Path};

use application::HealthConfig;
use integration_ridevibe::RideVibeConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "RIDEVIBE";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was read but cannot be used
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Video server (classification, search, catalog) configuration
    #[serde(default)]
    pub backend: RideVibeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Health check configuration
    #[serde(default)]
    pub health: HealthConfig,
}

impl AppConfig {
    /// Load configuration from an optional `config.*` file in the working
    /// directory and `RIDEVIBE_*` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file
    ///
    /// An explicit path must exist. Environment variables (e.g.
    /// `RIDEVIBE_BACKEND__BASE_URL`) override file values.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .with_list_parse_key("backend.search_options")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        debug!(base_url = %app_config.backend.base_url, "Configuration loaded");
        Ok(app_config)
    }

    /// Reject values the services cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.backend
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("backend: {e}")))?;

        let base_url = url::Url::parse(self.backend.base_url.trim())
            .map_err(|e| ConfigError::Invalid(format!("backend.base_url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!(
                "backend.base_url cannot hold paths: {base_url}"
            )));
        }

        if self.health.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "health.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".to_string()));
        }
        Ok(())
    }
}
