//! Intent classification port
//!
//! Decides whether a query asks for a trail video or a conversational answer.

use async_trait::async_trait;
use domain::{ClassificationResult, Query};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the external intent classification service
///
/// Implementations return the service's decision as-is; the reasoning behind
/// a classification belongs entirely to the service.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IntentClassifierPort: Send + Sync {
    /// Classify a raw query
    async fn classify(&self, query: &Query) -> Result<ClassificationResult, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn IntentClassifierPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn IntentClassifierPort>();
    }
}
