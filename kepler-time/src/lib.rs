//! Calendar dates, Julian Days and sidereal ("star") time.
//!
//! ```
//! use kepler_time::{CalendarDate, JulianDate};
//!
//! let jd = JulianDate::from_calendar(&CalendarDate::new(2000, 1, 1).with_time(12, 0, 0.0));
//! assert_eq!(jd.julian_day(), 2451545.0);
//! assert_eq!(jd.to_string(), "1.1.2000 12:0:0");
//!
//! let gmst = jd.star_time();
//! assert!((0.0..360.0).contains(&gmst));
//! ```
//!
//! Calendar fields are not range-checked on construction: a day of 40 rolls
//! forward through the arithmetic. Use [`JulianDate::try_from_calendar`] or
//! [`CalendarDate::validate`] when input comes from users.

pub mod calendar;
pub mod constants;
pub mod julian;
pub mod parsing;
pub mod sidereal;

pub use calendar::CalendarDate;
pub use constants::{vernal_equinox_2010, VERNAL_EQUINOX_2010};
pub use julian::JulianDate;
pub use sidereal::StarTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeError {
    InvalidDate(String),
    ParseError(String),
    CalculationError(String),
}

impl std::fmt::Display for TimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeError::InvalidDate(msg) => write!(f, "Invalid date: {}", msg),
            TimeError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            TimeError::CalculationError(msg) => write!(f, "Calculation error: {}", msg),
        }
    }
}

impl std::error::Error for TimeError {}

impl From<kepler_core::KeplerError> for TimeError {
    fn from(err: kepler_core::KeplerError) -> Self {
        match err {
            kepler_core::KeplerError::InvalidDate { .. } => TimeError::InvalidDate(err.to_string()),
            other => TimeError::CalculationError(other.to_string()),
        }
    }
}
