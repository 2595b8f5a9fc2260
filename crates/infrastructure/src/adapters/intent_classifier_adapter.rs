//! Intent classifier adapter - Implements IntentClassifierPort over the video server chat endpoint

use std::sync::Arc;

use application::{error::ApplicationError, ports::IntentClassifierPort};
use async_trait::async_trait;
use domain::{ClassificationResult, Query};
use integration_ridevibe::RideVibeApi;
use tracing::{debug, instrument};

use super::map_error;

/// Adapter for the `/gemini/chat` classification endpoint
pub struct IntentClassifierAdapter {
    client: Arc<dyn RideVibeApi>,
}

impl std::fmt::Debug for IntentClassifierAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentClassifierAdapter")
            .field("client", &"<RideVibeApi>")
            .finish()
    }
}

impl IntentClassifierAdapter {
    /// Create a new adapter
    #[must_use]
    pub fn new(client: Arc<dyn RideVibeApi>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IntentClassifierPort for IntentClassifierAdapter {
    #[instrument(skip(self, query), fields(query_len = query.char_count()))]
    async fn classify(&self, query: &Query) -> Result<ClassificationResult, ApplicationError> {
        let reply = self.client.chat(query.as_str()).await.map_err(map_error)?;

        let classification = ClassificationResult {
            is_location: reply.is_location,
            response: reply.response,
        };
        if !classification.is_usable() {
            return Err(ApplicationError::InvalidResponse(
                "conversational answer is empty".to_string(),
            ));
        }

        debug!(is_location = classification.is_location, "Intent classified");
        Ok(classification)
    }
}
