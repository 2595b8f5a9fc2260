//! Playback offset formatting

/// Format a playback offset in seconds as `M:SS`
///
/// Seconds are floored and zero-padded; minutes are not padded and may exceed
/// 59. Negative, NaN and infinite offsets render as `0:00`.
#[must_use]
pub fn format_timestamp(seconds: f64) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor()
    } else {
        0.0
    };

    // float-to-int `as` saturates, so huge offsets cannot wrap
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = whole as u64;

    format!("{}:{:02}", total / 60, total % 60)
}
