//! Semantic video search port

use async_trait::async_trait;
use domain::{Query, VideoMatch};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the semantic video search service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VideoSearchPort: Send + Sync {
    /// Find the best-matching clip for a query
    ///
    /// `Ok(None)` means the service answered but matched nothing.
    async fn search(&self, query: &Query) -> Result<Option<VideoMatch>, ApplicationError>;
}
