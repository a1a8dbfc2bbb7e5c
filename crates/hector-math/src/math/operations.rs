//! Small scalar operations used by map code.

/// Clamp `val` to `[min, max]`. Unlike `f64::clamp` this never panics on
/// `min > max` and lets NaN pass through unchanged.
#[inline]
pub fn clamp(val: f64, min: f64, max: f64) -> f64 {
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

#[inline]
pub fn square(x: f64) -> f64 {
    x * x
}

/// `value` if finite, otherwise `fallback` (which must itself be finite).
#[inline]
pub fn ensure_finite(value: f64, fallback: f64) -> f64 {
    debug_assert!(fallback.is_finite(), "ensure_finite fallback must be finite");
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Nearest multiple of `increment`.
#[inline]
pub fn make_multiple_round(value: f64, increment: f64) -> f64 {
    increment * (value / increment).round()
}

/// Smallest multiple of `increment` that is `>= value`.
#[inline]
pub fn make_multiple_ceil(value: f64, increment: f64) -> f64 {
    increment * (value / increment).ceil()
}

/// Largest multiple of `increment` that is `<= value`.
#[inline]
pub fn make_multiple_floor(value: f64, increment: f64) -> f64 {
    increment * (value / increment).floor()
}
