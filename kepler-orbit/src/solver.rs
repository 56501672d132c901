//! Heliocentric position from orbital elements.
//!
//! ```text
//! M = wrap(n·t + L - P)
//! V = true anomaly of M (see AnomalyMode)
//! R = 1000·a·(1 - e²) / (1 + e·cos V)
//! X = R·(cos O·cos u - sin O·sin u·cos I)
//! Y = R·(sin O·cos u + cos O·sin u·cos I)
//! Z = R·sin u·sin I,        u = V + P - O
//! ```
//!
//! Distances are `1000 × AU`, not meters. The plain accessors never fail:
//! element sets outside the elliptical model give unspecified output, which
//! [`OrbitPositionSolver::try_state_at_time`] reports when it is not finite.

use crate::anomaly::{self, AnomalyMode};
use crate::elements::OrbitalElements;
use kepler_core::angle::{radians, wrap_0_360};
use kepler_core::math::sincos;
use kepler_core::{KeplerError, KeplerResult, MathErrorKind, Vector3};

/// Heliocentric ecliptic Cartesian position in solver units.
pub type Position = Vector3;

/// Intermediate quantities of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub mean_anomaly: f64,
    pub true_anomaly: f64,
    pub radius: f64,
    pub position: Position,
}

/// Immutable solver; cheap to copy and safe to share between threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitPositionSolver {
    elements: OrbitalElements,
    mode: AnomalyMode,
}

impl OrbitPositionSolver {
    pub fn new(elements: OrbitalElements) -> Self {
        tracing::trace!(?elements, "created orbit solver");
        Self {
            elements,
            mode: AnomalyMode::SinglePass,
        }
    }

    pub fn with_mode(mut self, mode: AnomalyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn mode(&self) -> AnomalyMode {
        self.mode
    }

    /// Mean anomaly (deg) after `days`, in [0, 360).
    pub fn mean_anomaly(&self, days: f64) -> f64 {
        let el = &self.elements;
        wrap_0_360(el.daily_motion * days + el.mean_longitude - el.lon_perihelion)
    }

    /// True anomaly (deg) after `days`, in [0, 360).
    pub fn true_anomaly(&self, days: f64) -> f64 {
        anomaly::true_anomaly(self.mean_anomaly(days), self.elements.eccentricity, self.mode)
    }

    /// Heliocentric distance after `days`.
    pub fn radius(&self, days: f64) -> f64 {
        self.radius_at(self.true_anomaly(days))
    }

    pub fn position_at_time(&self, days: f64) -> Position {
        self.state_at_time(days).position
    }

    pub fn state_at_time(&self, days: f64) -> OrbitState {
        let mean_anomaly = self.mean_anomaly(days);
        let true_anomaly =
            anomaly::true_anomaly(mean_anomaly, self.elements.eccentricity, self.mode);
        let radius = self.radius_at(true_anomaly);
        OrbitState {
            mean_anomaly,
            true_anomaly,
            radius,
            position: self.rotate_to_ecliptic(true_anomaly, radius),
        }
    }

    /// Like [`state_at_time`](Self::state_at_time) but rejects a non-finite
    /// `days` and reports element sets that drive the result to NaN or
    /// infinity.
    pub fn try_state_at_time(&self, days: f64) -> KeplerResult<OrbitState> {
        if !days.is_finite() {
            return Err(KeplerError::math_error(
                "position",
                MathErrorKind::InvalidInput,
                &format!("days since epoch is {}", days),
            ));
        }
        let state = self.state_at_time(days);
        if !state.position.is_finite() {
            return Err(KeplerError::math_error(
                "position",
                MathErrorKind::NotFinite,
                &format!("position {:?} at day {}", state.position, days),
            ));
        }
        Ok(state)
    }

    fn radius_at(&self, true_anomaly: f64) -> f64 {
        let e = self.elements.eccentricity;
        1000.0 * self.elements.semi_major * (1.0 - e * e)
            / (1.0 + e * libm::cos(radians(true_anomaly)))
    }

    fn rotate_to_ecliptic(&self, true_anomaly: f64, radius: f64) -> Position {
        let el = &self.elements;
        let (sin_o, cos_o) = sincos(radians(el.lon_asc_node));
        let (sin_u, cos_u) =
            sincos(radians(true_anomaly + el.lon_perihelion - el.lon_asc_node));
        let (sin_i, cos_i) = sincos(radians(el.inclination));

        Vector3::new(
            radius * (cos_o * cos_u - sin_o * sin_u * cos_i),
            radius * (sin_o * cos_u + cos_o * sin_u * cos_i),
            radius * sin_u * sin_i,
        )
    }
}

impl From<OrbitalElements> for OrbitPositionSolver {
    fn from(elements: OrbitalElements) -> Self {
        Self::new(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kepler_core::test_helpers::{assert_close, assert_position_close};

    #[test]
    fn test_default_baseline() {
        let solver = OrbitPositionSolver::default();
        let state = solver.state_at_time(0.0);

        assert_close(state.mean_anomaly, 286.3396, 1e-9, "M");
        assert_close(state.true_anomaly, 281.08674784871744, 1e-9, "V");
        assert_close(state.radius, 1483.6843064651118, 1e-9, "R");
        assert_position_close(
            state.position,
            [-329.61337308241076, -1446.4375111730724, -22.196211558347596],
            1e-12,
            "t=0",
        );
        assert_close(state.position.magnitude(), state.radius, 1e-9, "|p|");
    }

    #[test]
    fn test_baselines_at_other_times() {
        let solver = OrbitPositionSolver::new(OrbitalElements::mars());
        assert_position_close(
            solver.position_at_time(100.0),
            [1390.4409297485026, 122.42991945822946, -31.618260969309713],
            1e-12,
            "t=100",
        );
        assert_close(solver.radius(100.0), 1396.1786342460455, 1e-9, "R(100)");
        assert_position_close(
            solver.position_at_time(365.25),
            [-191.24531704183832, -1458.68725001767, -25.854483434721967],
            1e-12,
            "t=365.25",
        );
        assert_position_close(
            solver.position_at_time(-50.0),
            [-1411.802599080068, -757.4239983189304, 18.841775033402094],
            1e-12,
            "t=-50",
        );
    }

    #[test]
    fn test_circular_orbit() {
        let solver = OrbitPositionSolver::new(OrbitalElements {
            eccentricity: 0.0,
            ..Default::default()
        });
        assert_position_close(
            solver.position_at_time(0.0),
            [-201.10583452391072, -1510.070314712731, -26.688425882478164],
            1e-12,
            "circular",
        );
        for days in [0.0, 90.0, 400.0] {
            assert_close(solver.radius(days), 1523.6365, 1e-9, "circular radius");
        }
    }

    #[test]
    fn test_zero_inclination_stays_in_ecliptic() {
        let solver = OrbitPositionSolver::new(OrbitalElements {
            inclination: 0.0,
            ..Default::default()
        });
        for days in [0.0, 123.0, 687.0] {
            assert_eq!(solver.position_at_time(days).z, 0.0);
        }
    }

    #[test]
    fn test_full_revolution_repeats() {
        let solver = OrbitPositionSolver::default();
        let a = solver.position_at_time(10.0);
        let b = solver.position_at_time(370.0);
        assert!((a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6 && (a.z - b.z).abs() < 1e-6);
    }

    #[test]
    fn test_obliquity_is_inert() {
        let base = OrbitPositionSolver::default();
        let tilted = OrbitPositionSolver::new(OrbitalElements {
            arc_to_ecliptic: 0.0,
            ..Default::default()
        });
        assert_eq!(base.position_at_time(42.0), tilted.position_at_time(42.0));
    }

    #[test]
    fn test_converged_mode_matches_kepler_radius() {
        let el = OrbitalElements {
            eccentricity: 0.4,
            ..Default::default()
        };
        let solver = OrbitPositionSolver::new(el).with_mode(AnomalyMode::converged());
        assert!(matches!(solver.mode(), AnomalyMode::Converged { .. }));

        for days in [0.0, 45.0, 130.0, 250.0] {
            let m = solver.mean_anomaly(days);
            let s = anomaly::solve_kepler(m, 0.4, 1e-12, 100);
            let e_rad = radians(s.eccentric_anomaly);
            let expected = 1000.0 * el.semi_major * (1.0 - 0.4 * libm::cos(e_rad));
            assert_close(solver.radius(days), expected, 1e-9, "converged radius");
        }
    }

    #[test]
    fn test_converged_differs_from_single_pass() {
        let el = OrbitalElements::mars();
        let single = OrbitPositionSolver::new(el);
        let converged = OrbitPositionSolver::new(el).with_mode(AnomalyMode::converged());
        let (q, big_q) = el.radius_bounds();
        let r = converged.radius(0.0);
        assert!(r >= q && r <= big_q);
        assert!((single.true_anomaly(0.0) - converged.true_anomaly(0.0)).abs() > 1e-3);
    }

    #[test]
    fn test_try_state_matches_plain_call() {
        let solver = OrbitPositionSolver::default();
        let state = solver.try_state_at_time(100.0).unwrap();
        assert_eq!(state, solver.state_at_time(100.0));
    }

    #[test]
    fn test_try_state_rejects_non_finite_days() {
        let solver = OrbitPositionSolver::default();
        for days in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = solver.try_state_at_time(days).unwrap_err();
            assert!(matches!(
                err,
                KeplerError::MathError {
                    kind: MathErrorKind::InvalidInput,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_try_state_reports_non_finite_position() {
        let solver = OrbitPositionSolver::new(OrbitalElements {
            semi_major: f64::INFINITY,
            ..Default::default()
        });
        assert!(!solver.position_at_time(0.0).is_finite());
        let err = solver.try_state_at_time(0.0).unwrap_err();
        assert!(matches!(
            err,
            KeplerError::MathError {
                kind: MathErrorKind::NotFinite,
                ..
            }
        ));
        assert!(err.to_string().contains("position"));
    }

    #[test]
    fn test_from_elements() {
        let solver: OrbitPositionSolver = OrbitalElements::mars().into();
        assert_eq!(solver, OrbitPositionSolver::default());
        assert_eq!(solver.elements(), &OrbitalElements::mars());
    }
}
