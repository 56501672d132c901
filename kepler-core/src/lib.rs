//! Shared building blocks for the kepler crates.
//!
//! `kepler-core` carries what both the calendar/Julian Day code and the orbit
//! solver need: angle normalization, degree/radian conversion, constants and
//! the error type.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`wrap_0_360`](angle::wrap_0_360), [`radians`](angle::radians), [`degrees`](angle::degrees) |
//! | [`constants`] | J2000, day/century lengths, Gregorian cutover, AU |
//! | [`errors`] | [`KeplerError`] and [`KeplerResult`] |
//! | [`math`] | `libm` wrappers used by the formulas |
//! | [`vector3`] | [`Vector3`], the Cartesian position type |
//! | [`test_helpers`] | position and scalar assertions for regression baselines |
//!
//! # Re-exports
//!
//! ```
//! use kepler_core::{KeplerError, KeplerResult, MathErrorKind, Vector3};
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod vector3;

pub use errors::{KeplerError, KeplerResult, MathErrorKind};
pub use vector3::Vector3;

pub mod test_helpers;
