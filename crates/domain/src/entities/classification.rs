//! Intent classification outcome

use serde::{Deserialize, Serialize};

use crate::messages::CLASSIFIER_FALLBACK_RESPONSE;

/// Decision of the intent classifier for one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// `true` routes the query to video search
    pub is_location: bool,
    /// Ready-to-show conversational answer, used when `is_location` is false
    pub response: String,
}

impl ClassificationResult {
    /// Query should be answered with a video
    pub fn location(response: impl Into<String>) -> Self {
        Self {
            is_location: true,
            response: response.into(),
        }
    }

    /// Query should be answered with prose
    pub fn conversational(response: impl Into<String>) -> Self {
        Self {
            is_location: false,
            response: response.into(),
        }
    }

    /// Classification used whenever the classifier cannot be consulted
    ///
    /// Biased toward search: a failed search still yields an apology the
    /// user can act on, while a dead-ended classifier yields nothing useful.
    #[must_use]
    pub fn fallback() -> Self {
        Self::location(CLASSIFIER_FALLBACK_RESPONSE)
    }

    /// Whether this result can be shown to a user as-is
    ///
    /// A conversational answer must carry text; a search routing needs none.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.is_location || !self.response.trim().is_empty()
    }
}
