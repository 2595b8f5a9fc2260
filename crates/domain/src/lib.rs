//! Domain layer for RideVibe
//!
//! Contains the value objects and entities that flow through the vibe query
//! pipeline, the fixed user-facing messages and the domain errors.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod messages;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
