// Substring helpers for field scanning.

use super::signals::Signal;

/// Check if a specified signal starts at byte position `pos`.
/// Returns the signal's byte length if matched.
#[inline]
pub fn match_signal_at(field: &str, pos: usize, signal: &Signal) -> Option<usize> {
    if signal.is_specified() && field.as_bytes()[pos..].starts_with(signal.as_str().as_bytes()) {
        Some(signal.byte_len())
    } else {
        None
    }
}

/// Return the first of `signals` that starts at byte position `pos`.
/// Optimized for the common case of 1-3 candidate signals.
#[inline]
pub fn match_any_at<'s>(field: &str, pos: usize, signals: &[&'s Signal]) -> Option<&'s Signal> {
    signals
        .iter()
        .copied()
        .find(|signal| match_signal_at(field, pos, signal).is_some())
}
