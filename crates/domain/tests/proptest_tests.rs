//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    DifficultyBand, Query, SearchResult, VideoId, VideoMatch, format_timestamp, messages,
};
use proptest::prelude::*;

// ============================================================================
// Timestamp formatting
// ============================================================================

mod timestamp_tests {
    use super::*;

    proptest! {
        #[test]
        fn output_is_minutes_colon_two_digit_seconds(seconds in 0.0f64..1_000_000.0) {
            let formatted = format_timestamp(seconds);
            let (minutes, secs) = formatted.split_once(':').unwrap();
            prop_assert_eq!(secs.len(), 2);
            prop_assert!(minutes.parse::<u64>().is_ok());
            prop_assert!(secs.parse::<u8>().unwrap() < 60);
            prop_assert!(minutes == "0" || !minutes.starts_with('0'));
        }

        #[test]
        fn round_trips_whole_seconds(total in 0u64..10_000_000) {
            let formatted = format_timestamp(total as f64);
            let (minutes, secs) = formatted.split_once(':').unwrap();
            let parsed = minutes.parse::<u64>().unwrap() * 60 + secs.parse::<u64>().unwrap();
            prop_assert_eq!(parsed, total);
        }

        #[test]
        fn fractions_never_round_up(total in 0u64..100_000, fraction in 0.0f64..0.999) {
            prop_assert_eq!(
                format_timestamp(total as f64 + fraction),
                format_timestamp(total as f64)
            );
        }

        #[test]
        fn negative_is_zero(seconds in -1_000_000.0f64..0.0) {
            prop_assert_eq!(format_timestamp(seconds), "0:00");
        }
    }
}

// ============================================================================
// Query
// ============================================================================

mod query_tests {
    use super::*;

    proptest! {
        #[test]
        fn non_blank_text_is_accepted_verbatim(text in "[a-zA-Z0-9 ]{0,20}[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}") {
            let query = Query::new(text.clone()).unwrap();
            prop_assert_eq!(query.as_str(), text.as_str());
        }

        #[test]
        fn whitespace_only_is_rejected(text in "[ \t\n\r]{0,30}") {
            prop_assert!(Query::new(text).is_err());
        }
    }
}

// ============================================================================
// Search result
// ============================================================================

mod search_result_tests {
    use super::*;

    proptest! {
        #[test]
        fn message_is_never_empty(
            name in proptest::option::of("[A-Za-z ]{1,30}"),
            start in proptest::option::of(0.0f64..10_000.0)
        ) {
            let mut found = VideoMatch::new(VideoId::new("v1").unwrap());
            found.trail_name = name;
            found.start_seconds = start;
            let result = SearchResult::found(found);
            prop_assert!(result.has_video());
            prop_assert!(result.message.starts_with("Here's a clip that matches your vibe"));
            prop_assert!(result.message.contains(&format_timestamp(start.unwrap_or(0.0))));
        }
    }

    #[test]
    fn empty_outcomes_use_fixed_messages() {
        assert_eq!(SearchResult::no_match().message, messages::NO_MATCH);
        assert_eq!(SearchResult::search_error().message, messages::SEARCH_ERROR);
    }
}

// ============================================================================
// Difficulty
// ============================================================================

mod difficulty_tests {
    use super::*;

    proptest! {
        #[test]
        fn bands_are_monotonic(a in 0.0f64..10.0, b in 0.0f64..10.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let rank = |band: DifficultyBand| match band {
                DifficultyBand::Easy => 0,
                DifficultyBand::Moderate => 1,
                DifficultyBand::Hard => 2,
                DifficultyBand::Extreme => 3,
                DifficultyBand::Unrated => unreachable!("scores always map to a band"),
            };
            prop_assert!(rank(DifficultyBand::from_score(low)) <= rank(DifficultyBand::from_score(high)));
        }
    }
}
