use crate::JulianDate;
use kepler_core::angle::{radians, wrap_0_360};
use kepler_core::constants::DEGREES_PER_HOUR;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Greenwich mean sidereal time, in degrees within [0, 360).
///
/// Evaluated with the cubic in Julian centuries `T` since J2000.0:
///
/// ```text
/// θ = 100.460618375 + 36000.77005360833 T + 0.0003879333 T² - T³ / 38710000
/// ```
///
/// The polynomial has no Earth-rotation term, so it gives the sidereal time at
/// 0h UT of the day containing the Julian Day; the time of day enters only
/// through `T`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StarTime(f64);

impl StarTime {
    pub fn from_julian_date(jd: &JulianDate) -> Self {
        let t = jd.centuries_since_j2000();
        let t2 = t * t;
        let t3 = t2 * t;
        let theta = 100.460618375 + 36000.77005360833 * t + 0.0003879333 * t2 - t3 / 38710000.0;
        Self(wrap_0_360(theta))
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0 / DEGREES_PER_HOUR
    }

    pub fn radians(&self) -> f64 {
        radians(self.0)
    }

    /// Adds a fixed offset in degrees without renormalizing.
    pub fn corrected(&self, correction_degrees: f64) -> f64 {
        self.0 + correction_degrees
    }
}

impl fmt::Display for StarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}h", self.hours())
    }
}
