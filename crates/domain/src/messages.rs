//! User-facing messages produced by the vibe query pipeline
//!
//! Every string a user can see from the pipeline is defined here. Callers
//! never surface raw errors, status codes or backend text other than the
//! conversational answer of the intent classifier.

use crate::value_objects::format_timestamp;

/// Conversational text carried by the fallback classification
pub const CLASSIFIER_FALLBACK_RESPONSE: &str = "Searching for videos...";

/// Shown when the search backend could not be reached or answered garbage
pub const SEARCH_ERROR: &str = "Sorry, there was an error searching for videos.";

/// Shown when the search backend found nothing for the query
pub const NO_MATCH: &str = "Sorry, I couldn't find any videos matching your request.";

/// Shown when anything unexpected happens inside the pipeline
pub const GENERIC_FAILURE: &str = "Sorry, I encountered an error while processing your request. \
                                   Try asking about mountain biking techniques or searching for \
                                   specific trails!";

/// Trail name used when the search backend omits one
pub const DEFAULT_TRAIL_NAME: &str = "Mountain Bike Trail";

/// Message announcing a matched clip and where playback will start
#[must_use]
pub fn clip_found(trail_name: &str, start_seconds: f64) -> String {
    format!(
        "Here's a clip that matches your vibe: **{trail_name}**. Jumping to {}.",
        format_timestamp(start_seconds)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_found_embeds_name_and_time() {
        let message = clip_found("Canyon Run", 83.0);
        assert_eq!(
            message,
            "Here's a clip that matches your vibe: **Canyon Run**. Jumping to 1:23."
        );
    }

    #[test]
    fn generic_failure_is_a_single_sentence_pair() {
        assert_eq!(
            GENERIC_FAILURE,
            "Sorry, I encountered an error while processing your request. Try asking about \
             mountain biking techniques or searching for specific trails!"
        );
    }

    #[test]
    fn fixed_messages_are_not_empty() {
        for message in [
            CLASSIFIER_FALLBACK_RESPONSE,
            SEARCH_ERROR,
            NO_MATCH,
            GENERIC_FAILURE,
            DEFAULT_TRAIL_NAME,
        ] {
            assert!(!message.trim().is_empty());
        }
    }
}
