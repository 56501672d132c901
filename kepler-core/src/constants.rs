pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const MINUTES_PER_DAY: f64 = 1440.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const DEGREES_PER_CIRCLE: f64 = 360.0;

pub const DEGREES_PER_HOUR: f64 = 15.0;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Astronomical Unit in meters, as declared alongside the orbit model.
///
/// Differs from the IAU 2012 exact value (149 597 870 700 m) by 9 m. Positions
/// produced by the orbit solver are scaled by `1000 * semi_major` and do not
/// use this value.
pub const ASTRONOMICAL_UNIT_M: f64 = 149_597_870_691.0;

/// Last calendar date (as `year * 10000 + month * 100 + day`) computed with the
/// Julian calendar when converting to a Julian Day.
pub const GREGORIAN_CUTOVER_DATE: f64 = 15_821_004.1;

/// First Julian Day number recovered with the Gregorian calendar (1582-10-15).
pub const GREGORIAN_CUTOVER_JD: f64 = 2_299_161.0;

/// Mean obliquity of the ecliptic carried with the orbital element set.
pub const ECLIPTIC_OBLIQUITY_DEG: f64 = 23.45;
