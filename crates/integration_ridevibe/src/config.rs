//! Video server client configuration

use serde::{Deserialize, Serialize};

use crate::error::RideVibeError;

/// Configuration for the RideVibe video server client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideVibeConfig {
    /// Base URL of the video server (default: <http://localhost:8000>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds, covering connect, send and body read
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Search modalities sent with each search (e.g. "visual", "audio").
    /// Empty leaves the choice to the server.
    #[serde(default)]
    pub search_options: Vec<String>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_connect_timeout_secs() -> u64 {
    5
}

impl Default for RideVibeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            search_options: Vec::new(),
        }
    }
}

impl RideVibeConfig {
    /// Configuration pointing at a test server with short timeouts
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 2,
            connect_timeout_secs: 1,
            search_options: Vec::new(),
        }
    }

    /// Check the configuration for values the client cannot work with
    pub fn validate(&self) -> Result<(), RideVibeError> {
        if self.base_url.trim().is_empty() {
            return Err(RideVibeError::ConfigurationError(
                "base_url must not be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(RideVibeError::ConfigurationError(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.connect_timeout_secs == 0 {
            return Err(RideVibeError::ConfigurationError(
                "connect_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RideVibeConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 5);
        assert!(config.search_options.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: RideVibeConfig =
            serde_json::from_str(r#"{"base_url": "http://videos:9000"}"#).unwrap();
        assert_eq!(config.base_url, "http://videos:9000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = RideVibeConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RideVibeConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RideVibeConfig {
            connect_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn for_testing_uses_short_timeouts() {
        let config = RideVibeConfig::for_testing("http://127.0.0.1:1234");
        assert_eq!(config.base_url, "http://127.0.0.1:1234");
        assert!(config.timeout_secs <= 2);
    }
}
