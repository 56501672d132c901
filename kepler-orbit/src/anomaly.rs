//! Mean, eccentric and true anomaly.
//!
//! All angles are in degrees. The default [`AnomalyMode::SinglePass`] applies
//! one Newton correction to the equation-of-center estimate and uses the result
//! directly as the true anomaly; positions computed this way are the regression
//! baseline and must not change. [`AnomalyMode::Converged`] iterates the same
//! correction on Kepler's equation to a tolerance and converts the eccentric
//! anomaly to the true anomaly.

use kepler_core::angle::{degrees, radians, wrap_0_360};
use kepler_core::constants::RAD_TO_DEG;
use kepler_core::math::sincos;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOLERANCE_DEG: f64 = 1e-10;

pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnomalyMode {
    /// One fixed-point correction step.
    #[default]
    SinglePass,
    /// Newton iteration on Kepler's equation until the step is below
    /// `tolerance_deg` or `max_iterations` is reached.
    Converged {
        tolerance_deg: f64,
        max_iterations: u32,
    },
}

impl AnomalyMode {
    pub fn converged() -> Self {
        Self::Converged {
            tolerance_deg: DEFAULT_TOLERANCE_DEG,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Outcome of [`solve_kepler`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: f64,
    pub iterations: u32,
    pub converged: bool,
}

/// First-order equation-of-center estimate, `M + e·sin M·(1 + e·cos M)` (deg).
#[inline]
pub fn initial_estimate(mean_anomaly: f64, e: f64) -> f64 {
    let (sin_m, cos_m) = sincos(radians(mean_anomaly));
    mean_anomaly + RAD_TO_DEG * e * sin_m * (1.0 + e * cos_m)
}

/// One Newton step on `E - e·sin E = M` (deg).
#[inline]
pub fn newton_step(estimate: f64, mean_anomaly: f64, e: f64) -> f64 {
    let (sin_v, cos_v) = sincos(radians(estimate));
    estimate - (estimate - RAD_TO_DEG * e * sin_v - mean_anomaly) / (1.0 - e * cos_v)
}

/// True anomaly from a single correction step, in [0, 360).
pub fn single_pass(mean_anomaly: f64, e: f64) -> f64 {
    let v0 = initial_estimate(mean_anomaly, e);
    wrap_0_360(newton_step(v0, mean_anomaly, e))
}

/// Solves Kepler's equation for the eccentric anomaly (deg).
///
/// Starts from [`initial_estimate`]. Returns the last iterate when the budget
/// runs out; `converged` reports whether the tolerance was met.
pub fn solve_kepler(mean_anomaly: f64, e: f64, tolerance_deg: f64, max_iterations: u32) -> KeplerSolution {
    let mut estimate = initial_estimate(mean_anomaly, e);
    for iteration in 1..=max_iterations {
        let next = newton_step(estimate, mean_anomaly, e);
        let delta = (next - estimate).abs();
        estimate = next;
        if delta < tolerance_deg {
            return KeplerSolution {
                eccentric_anomaly: estimate,
                iterations: iteration,
                converged: true,
            };
        }
    }
    KeplerSolution {
        eccentric_anomaly: estimate,
        iterations: max_iterations,
        converged: false,
    }
}

/// True anomaly from eccentric anomaly for an ellipse, in [0, 360).
pub fn true_from_eccentric(eccentric_anomaly: f64, e: f64) -> f64 {
    let (sin_half, cos_half) = sincos(radians(eccentric_anomaly) / 2.0);
    let v = 2.0 * libm::atan2(libm::sqrt(1.0 + e) * sin_half, libm::sqrt(1.0 - e) * cos_half);
    wrap_0_360(degrees(v))
}

/// True anomaly (deg) for the given mean anomaly under `mode`.
pub fn true_anomaly(mean_anomaly: f64, e: f64, mode: AnomalyMode) -> f64 {
    match mode {
        AnomalyMode::SinglePass => single_pass(mean_anomaly, e),
        AnomalyMode::Converged {
            tolerance_deg,
            max_iterations,
        } => {
            let solution = solve_kepler(mean_anomaly, e, tolerance_deg, max_iterations);
            if solution.converged {
                tracing::debug!(
                    mean_anomaly,
                    iterations = solution.iterations,
                    "kepler equation converged"
                );
            } else {
                tracing::warn!(
                    mean_anomaly,
                    eccentricity = e,
                    max_iterations,
                    "kepler equation did not converge, using last iterate"
                );
            }
            true_from_eccentric(solution.eccentric_anomaly, e)
        }
    }
}
