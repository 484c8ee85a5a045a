//! Scalar interpolation primitives shared by the locator and the built-in
//! numeric interpolator.

/// Linear interpolation of scalars. `ratio` is not clamped, so values outside
/// `[0, 1]` extrapolate along the same line.
#[inline]
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * ratio
}

/// Inverse of [`lerp`]: the ratio at which `lerp(a, b, ratio) == x`.
///
/// `a == b` is not guarded and yields NaN (or an infinity when `x != a`).
/// A zero result is always `+0.0`, so reversed spans such as
/// `inverse_lerp(10.0, 0.0, 10.0)` do not leak a negative zero.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, x: f64) -> f64 {
    // -0.0 + 0.0 == +0.0; every other value, NaN included, passes through.
    (x - a) / (b - a) + 0.0
}
