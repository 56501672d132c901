//! Classical orbital elements.
//!
//! Angles are in degrees, the semi-major axis in astronomical units and the
//! daily motion in degrees per day. The defaults describe Mars.

use kepler_core::constants::ECLIPTIC_OBLIQUITY_DEG;
use kepler_core::{KeplerError, KeplerResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Element set of a body orbiting the Sun.
///
/// Construct with struct-update syntax to override individual elements:
///
/// ```
/// use kepler_orbit::OrbitalElements;
///
/// let circular = OrbitalElements { eccentricity: 0.0, ..Default::default() };
/// assert_eq!(circular.semi_major, 1.5236365);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrbitalElements {
    /// Mean motion (deg/day).
    pub daily_motion: f64,
    /// Mean longitude at epoch (deg).
    pub mean_longitude: f64,
    /// Longitude of perihelion (deg).
    pub lon_perihelion: f64,
    pub eccentricity: f64,
    /// Semi-major axis (AU).
    pub semi_major: f64,
    /// Longitude of the ascending node (deg).
    pub lon_asc_node: f64,
    /// Inclination to the ecliptic (deg).
    pub inclination: f64,
    /// Obliquity of the ecliptic (deg). Carried with the element set; the
    /// position formula does not use it.
    pub arc_to_ecliptic: f64,
}

impl Default for OrbitalElements {
    fn default() -> Self {
        Self::mars()
    }
}

impl OrbitalElements {
    pub fn mars() -> Self {
        Self {
            daily_motion: 1.0,
            mean_longitude: 262.4278,
            lon_perihelion: 336.0882,
            eccentricity: 0.0934231,
            semi_major: 1.5236365,
            lon_asc_node: 49.5664,
            inclination: 1.84992,
            arc_to_ecliptic: ECLIPTIC_OBLIQUITY_DEG,
        }
    }

    /// Argument of perihelion, `lon_perihelion - lon_asc_node` (deg).
    pub fn argument_of_perihelion(&self) -> f64 {
        self.lon_perihelion - self.lon_asc_node
    }

    /// Perihelion and aphelion distances in the solver's scaled units
    /// (`1000 * semi_major`).
    pub fn radius_bounds(&self) -> (f64, f64) {
        let a = 1000.0 * self.semi_major;
        (a * (1.0 - self.eccentricity), a * (1.0 + self.eccentricity))
    }

    /// Rejects element sets outside the elliptical two-body model.
    ///
    /// The solver itself accepts anything; this is for input from users or files.
    pub fn validate(&self) -> KeplerResult<()> {
        let fields = [
            ("daily_motion", self.daily_motion),
            ("mean_longitude", self.mean_longitude),
            ("lon_perihelion", self.lon_perihelion),
            ("eccentricity", self.eccentricity),
            ("semi_major", self.semi_major),
            ("lon_asc_node", self.lon_asc_node),
            ("inclination", self.inclination),
            ("arc_to_ecliptic", self.arc_to_ecliptic),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(KeplerError::invalid_elements(name, "must be finite"));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(KeplerError::invalid_elements(
                "eccentricity",
                "must be in [0, 1) for an elliptical orbit",
            ));
        }
        if self.semi_major <= 0.0 {
            return Err(KeplerError::invalid_elements(
                "semi_major",
                "must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl OrbitalElements {
    /// Parses an element set from JSON. Missing fields take the Mars defaults.
    pub fn from_json_str(json: &str) -> KeplerResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| KeplerError::data_error("orbital elements", "parse", &e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> KeplerResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            KeplerError::data_error(
                "orbital elements",
                "read",
                &format!("{}: {}", path.display(), e),
            )
        })?;
        let elements = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), ?elements, "loaded orbital elements");
        Ok(elements)
    }
}
