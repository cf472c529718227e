//! Display-duration heuristic for user-facing messages.
//!
//! Pure utility: duration grows with word count at a configurable reading
//! speed, floored so short toasts stay readable and capped so long ones do
//! not linger.

/// Shortest duration ever suggested, in milliseconds.
pub const MIN_DURATION_MS: u64 = 2_000;

/// Longest duration ever suggested, in milliseconds.
pub const MAX_DURATION_MS: u64 = 10_000;

/// Default reading speed in words per second.
pub const DEFAULT_WORDS_PER_SECOND: f64 = 3.0;

/// Suggested display duration for a message.
///
/// Word count divided by `words_per_second`, clamped to
/// [`MIN_DURATION_MS`]..=[`MAX_DURATION_MS`]. Empty messages and
/// non-positive speeds fall back to the floor and the default speed
/// respectively.
///
/// # Example
///
/// ```rust
/// use uniform_error::duration::{message_duration_ms, DEFAULT_WORDS_PER_SECOND};
///
/// assert_eq!(message_duration_ms("Error occurred", DEFAULT_WORDS_PER_SECOND), 2000);
/// ```
pub fn message_duration_ms(message: &str, words_per_second: f64) -> u64 {
    let words = message.split_whitespace().count();
    if words == 0 {
        return MIN_DURATION_MS;
    }

    let speed = if words_per_second > 0.0 {
        words_per_second
    } else {
        DEFAULT_WORDS_PER_SECOND
    };

    let raw_ms = (words as f64 / speed * 1_000.0).round() as u64;
    raw_ms.clamp(MIN_DURATION_MS, MAX_DURATION_MS)
}
