//! Video server client errors

use thiserror::Error;

/// Errors returned by the video server client
#[derive(Debug, Error)]
pub enum RideVibeError {
    /// Could not connect to the video server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete in time
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// Configured timeout in seconds
        timeout_secs: u64,
    },

    /// The request failed before a response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code
        status: u16,
        /// Response body (truncated)
        body: String,
    },

    /// The requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server reported that its search quota is exhausted
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The response body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client configuration is unusable
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl RideVibeError {
    /// The server could not be reached or did not answer in time
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout { .. } | Self::RequestFailed(_)
        )
    }

    /// The server answered, but with a non-success status
    #[must_use]
    pub const fn is_http_status(&self) -> bool {
        matches!(
            self,
            Self::HttpStatus { .. } | Self::NotFound(_) | Self::RateLimitExceeded
        )
    }
}
