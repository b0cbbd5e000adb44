//! Rounding and clamping helpers that let NaN through
//!
//! `f64::max` returns the non-NaN operand, which would turn an out-of-domain
//! input into a plausible-looking price. These helpers keep NaN visible.

/// Round to the nearest integer, halves rounding up
///
/// Compares the fractional part against one half instead of adding 0.5 first,
/// which would round 0.49999999999999994 up and break odd integers above 2^52.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to the nearest multiple of `step`, halves rounding up
pub(crate) fn round_to_step(value: f64, step: f64) -> f64 {
    round_half_up(value / step) * step
}

/// `max(floor, value)`, but NaN stays NaN
pub(crate) fn floor_at(floor: f64, value: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.max(floor)
    }
}
