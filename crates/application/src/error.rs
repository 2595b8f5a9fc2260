//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Adapters translate backend failures into these kinds; the pipeline then
/// decides per stage how each kind degrades.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Backend could not be reached or did not answer in time
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Backend answered with a non-success status
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Backend answered with a body that could not be used
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// The backend answered with a status rather than failing to answer
    #[must_use]
    pub const fn is_backend_rejection(&self) -> bool {
        matches!(self, Self::ExternalService(_) | Self::NotFound(_))
    }

    /// The backend could not be reached
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable(_))
    }
}
