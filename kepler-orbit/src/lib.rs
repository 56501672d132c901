//! Two-body orbit positions from classical elements.
//!
//! ```
//! use kepler_orbit::{OrbitPositionSolver, OrbitalElements};
//!
//! let solver = OrbitPositionSolver::new(OrbitalElements::default());
//! let p = solver.position_at_time(0.0);
//! assert!((p.magnitude() - solver.radius(0.0)).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`elements`] | [`OrbitalElements`] with Mars defaults, validation, JSON loading |
//! | [`anomaly`] | mean/eccentric/true anomaly and [`AnomalyMode`] |
//! | [`solver`] | [`OrbitPositionSolver`] and the ecliptic rotation |

pub mod anomaly;
pub mod elements;
pub mod solver;

pub use anomaly::AnomalyMode;
pub use elements::OrbitalElements;
pub use solver::{OrbitPositionSolver, OrbitState, Position};
