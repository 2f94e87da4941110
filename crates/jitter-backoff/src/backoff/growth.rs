//! Growth, clamp, and jitter arithmetic on nanosecond durations.

use rand::Rng;
use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Multiply `current` by `factor`, truncating to whole nanoseconds and
/// clamping to `max`.
///
/// Returns the new delay and whether it was clamped. The product is taken in
/// `f64`, so it cannot wrap: anything above `max` (including infinity) pins to
/// `max`, and anything that is NaN or not positive becomes zero.
pub(crate) fn grow(current: Duration, factor: f64, max: Duration) -> (Duration, bool) {
    let scaled = current.as_nanos() as f64 * factor;
    if scaled.is_nan() || scaled <= 0.0 {
        return (Duration::ZERO, false);
    }

    // Saturating float-to-int cast, floors the fraction.
    let candidate = scaled as u128;
    if candidate > max.as_nanos() {
        (max, true)
    } else {
        (from_nanos(candidate), false)
    }
}

/// Draw uniformly from the closed range `[0, upper]`.
pub(crate) fn full_jitter<R: Rng + ?Sized>(rng: &mut R, upper: Duration) -> Duration {
    from_nanos(rng.gen_range(0..=upper.as_nanos()))
}

// Callers only pass values bounded by an existing `Duration`, so the seconds
// always fit in a u64.
fn from_nanos(nanos: u128) -> Duration {
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}
