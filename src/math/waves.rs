//! Periodic wave shapes

use std::f64::consts::PI;

/// Direction cosine used for the 120° and 240° interference axes
pub const AXIS_SINE: f64 = 0.866;

/// Triangle wave with period `2π` mapping onto `[-1, 1]`
///
/// Piecewise linear, so summing several of these along different axes yields
/// straight-edged cells instead of the round blobs a cosine would give.
pub fn triangle(t: f64) -> f64 {
    ((t / PI).rem_euclid(2.0) - 1.0).abs().mul_add(2.0, -1.0)
}

/// Three-axis triangle wave interference rescaled to `[0, 1]`
///
/// Evaluates the wave along 0°, 120° and 240° at an already frequency-scaled
/// point.
pub fn hex_interference(x: f64, y: f64) -> f64 {
    let v1 = triangle(x);
    let v2 = triangle((-0.5f64).mul_add(x, AXIS_SINE * y));
    let v3 = triangle((-0.5f64).mul_add(x, -AXIS_SINE * y));
    (v1 + v2 + v3 + 3.0) / 6.0
}

/// Stripe-width modulation factor for a pinch field value in `[0, 1]`
pub fn pinch_amplitude(pinch: f64) -> f64 {
    1.2f64.mul_add(pinch - 0.5, 1.0)
}
