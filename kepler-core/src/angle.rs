//! Angle normalization and degree/radian conversion.
//!
//! The orbit and sidereal-time formulas work in degrees and only drop to
//! radians for the trigonometric calls, so the helpers here are degree-first:
//!
//! | Function | Input | Output Range |
//! |----------|-------|--------------|
//! | [`wrap_0_360`] | degrees | [0, 360) |
//! | [`radians`] | degrees | radians |
//! | [`degrees`] | radians | degrees |
//!
//! # Algorithm Notes
//!
//! Wrapping uses `libm::fmod` (via [`crate::math::fmod`]) instead of looping
//! with repeated additions of 360. Both give the same answer for ordinary
//! inputs, but the loop never terminates for magnitudes where `x - 360 == x`.
//! `fmod` is exact, so the only rounding happens when a tiny negative
//! remainder is shifted up by a full turn; that case is folded back to zero so
//! the result stays in the half-open range.

use crate::constants::{DEGREES_PER_CIRCLE, DEG_TO_RAD, RAD_TO_DEG};
use crate::math::fmod;

/// Reduces an angle in degrees to [0, 360).
///
/// Idempotent: `wrap_0_360(wrap_0_360(x)) == wrap_0_360(x)` for every finite `x`.
/// Non-finite input propagates as NaN.
///
/// # Examples
///
/// ```
/// use kepler_core::angle::wrap_0_360;
///
/// assert_eq!(wrap_0_360(370.0), 10.0);
/// assert_eq!(wrap_0_360(-90.0), 270.0);
/// assert_eq!(wrap_0_360(360.0), 0.0);
/// ```
#[inline]
pub fn wrap_0_360(x: f64) -> f64 {
    let w = fmod(x, DEGREES_PER_CIRCLE);
    if w < 0.0 {
        let shifted = w + DEGREES_PER_CIRCLE;
        // -1e-20 + 360 rounds to 360
        if shifted >= DEGREES_PER_CIRCLE {
            0.0
        } else {
            shifted
        }
    } else {
        w
    }
}

/// Degrees to radians.
#[inline]
pub fn radians(deg: f64) -> f64 {
    deg * DEG_TO_RAD
}

/// Radians to degrees.
#[inline]
pub fn degrees(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}
