//! Tolerance checks for position and angle baselines.
//!
//! Errors are relative to `max(|expected|, 1)`, so values near zero are
//! compared absolutely. Position components share the scale of the whole
//! expected vector: a small `z` out of the ecliptic is held to the same
//! absolute accuracy as `x` and `y`.

use crate::vector3::Vector3;

/// `|actual - expected|` scaled by `max(|scale|, 1)`.
#[inline]
pub fn relative_error(actual: f64, expected: f64, scale: f64) -> f64 {
    (actual - expected).abs() / scale.abs().max(1.0)
}

#[track_caller]
pub fn assert_close(actual: f64, expected: f64, rel_tol: f64, what: &str) {
    let err = relative_error(actual, expected, expected);
    assert!(
        err <= rel_tol,
        "{}: expected {}, got {} (relative error {:e} > {:e})",
        what,
        expected,
        actual,
        err,
        rel_tol
    );
}

/// Asserts that a position matches an `[x, y, z]` baseline.
///
/// Non-finite components always fail.
#[track_caller]
pub fn assert_position_close(actual: Vector3, expected: [f64; 3], rel_tol: f64, what: &str) {
    assert!(
        actual.is_finite(),
        "{}: non-finite position {:?}",
        what,
        actual
    );
    let scale = Vector3::from(expected).magnitude();
    let (x, y, z): (f64, f64, f64) = actual.into();
    for (axis, a, e) in [("x", x, expected[0]), ("y", y, expected[1]), ("z", z, expected[2])] {
        let err = relative_error(a, e, scale);
        assert!(
            err <= rel_tol,
            "{} {}: expected {}, got {} (error {:e} of |r| = {} exceeds {:e})",
            what,
            axis,
            e,
            a,
            err,
            scale,
            rel_tol
        );
    }
}
