//! Application layer - Use cases and orchestration
//!
//! Defines the ports through which the vibe query pipeline reaches its
//! backends and the services that sequence them. Adapters in the
//! infrastructure layer implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
