// Scalar math utilities for the transform helpers

use std::f64::consts::PI;

/// Degrees in one radian.
pub const RADIANS_TO_DEGREES: f64 = 180.0 / PI;

/// Radians in one degree.
pub const DEGREES_TO_RADIANS: f64 = PI / 180.0;

/// Largest 32-bit signed integer, used by callers as an "unbounded" sentinel.
pub const MAX_VALUE: i32 = i32::MAX;

/// Smallest 32-bit signed integer, the lower sentinel.
pub const MIN_VALUE: i32 = i32::MIN;

/// Absolute tolerance used by [`approximately_equal`].
///
/// Not scaled to operand magnitude: it is far too strict for values in the
/// millions and too loose for values near `1e-8` themselves.
pub const EPSILON: f64 = 1e-8;

/// Returns true when `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approximately_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Clamps `value` into `[min, max]`.
///
/// Inverted bounds are swapped instead of rejected, so `clamp(5.0, 10.0, 1.0)`
/// is `5.0`. Unlike `f64::clamp` this never panics.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min > max { (max, min) } else { (min, max) };
    if value < lo {
        lo
    } else if value < hi {
        value
    } else {
        hi
    }
}

/// Linear interpolation `a * (1 - t) + b * t`. `t` is not clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Alias of [`lerp`] under the name the shader side uses.
#[inline]
pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    lerp(a, b, t)
}

/// Maps a pixel coordinate to normalized device coordinates in `[-1, 1]`.
///
/// `offset` is a centering offset in pixels (half of it is applied) and
/// `extent` the screen size along the same axis. An `extent` of zero yields
/// an infinite or NaN result; callers must not pass one.
#[inline]
pub fn screen_to_normalized(value: f64, offset: f64, extent: f64) -> f64 {
    (value + offset * 0.5) / extent * 2.0 - 1.0
}

/// Inverse of [`screen_to_normalized`].
#[inline]
pub fn normalized_to_screen(value: f64, offset: f64, extent: f64) -> f64 {
    (value + 1.0) * 0.5 * extent - offset * 0.5
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * DEGREES_TO_RADIANS
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * RADIANS_TO_DEGREES
}
