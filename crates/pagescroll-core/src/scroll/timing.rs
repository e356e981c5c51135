//! Time calculation utilities for scroll animations

use std::time::Duration;

/// Fraction of `duration` elapsed between `start` and `now`.
///
/// Not clamped: values at or above 1.0 mean the run is over. A zero
/// duration is always complete.
#[inline]
pub fn progress(start: Duration, now: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start);
    elapsed.as_secs_f64() / duration.as_secs_f64()
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
