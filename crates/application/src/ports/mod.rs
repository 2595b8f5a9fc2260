//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod intent_classifier_port;
mod video_catalog_port;
mod video_search_port;

pub use intent_classifier_port::IntentClassifierPort;
#[cfg(test)]
pub use intent_classifier_port::MockIntentClassifierPort;
#[cfg(test)]
pub use video_catalog_port::MockVideoCatalogPort;
pub use video_catalog_port::VideoCatalogPort;
#[cfg(test)]
pub use video_search_port::MockVideoSearchPort;
pub use video_search_port::VideoSearchPort;
