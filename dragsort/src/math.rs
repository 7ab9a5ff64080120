/// Clamps `value` into the closed interval spanned by `min` and `max`.
///
/// Bounds given in the wrong order are swapped, so `clamp(v, 10.0, 0.0)` behaves like
/// `clamp(v, 0.0, 10.0)`. Unlike [`f64::clamp`] this never panics; a NaN `value` is returned
/// unchanged.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min > max { (max, min) } else { (min, max) };
    if value <= lo {
        lo
    } else if value >= hi {
        hi
    } else {
        value
    }
}

/// Returns `true` if `number` lies in the closed interval between `start` and `end`, in either
/// order.
pub fn is_between(number: f64, start: f64, end: f64) -> bool {
    let (a, b) = if start > end { (end, start) } else { (start, end) };
    number >= a && number <= b
}

/// Rounds to the nearest integer, halves toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
///
/// Implemented without `std` float intrinsics so it is available under `no_std`. Values too large
/// to carry a fraction are returned unchanged.
pub(crate) fn round_half_up(value: f64) -> f64 {
    const EXACT: f64 = 4_503_599_627_370_496.0; // 2^52
    if !value.is_finite() || value >= EXACT || value <= -EXACT {
        return value;
    }
    let shifted = value + 0.5;
    let truncated = shifted as i64 as f64;
    if truncated > shifted {
        truncated - 1.0
    } else {
        truncated
    }
}
