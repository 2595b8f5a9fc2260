//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Query text is empty or whitespace only
    #[error("Query cannot be empty")]
    EmptyQuery,

    /// Video identifier is empty or malformed
    #[error("Invalid video id: {0:?}")]
    InvalidVideoId(String),

    /// Coordinates are outside the valid range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
