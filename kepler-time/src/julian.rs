//! Julian Day numbers.
//!
//! The forward transform is the classic hybrid-calendar algorithm: months
//! January and February count as months 13 and 14 of the previous year, and
//! dates after 1582-10-04 receive the Gregorian century correction. The inverse
//! follows Meeus (Astronomical Algorithms, ch. 7) and switches calendars at
//! JD 2299161.
//!
//! Every computation reads only the value stored in the instance, so distinct
//! `JulianDate`s can be used from any number of threads.

use crate::calendar::CalendarDate;
use crate::sidereal::StarTime;
use crate::TimeResult;
use kepler_core::constants::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, GREGORIAN_CUTOVER_JD, HOURS_PER_DAY, J2000_JD,
    MINUTES_PER_DAY, SECONDS_PER_DAY_F64,
};
use kepler_core::math::floor;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Offset added to the Julian Day before splitting off the time of day.
///
/// 0.5 moves the day boundary from noon to midnight; the extra 1e-8 day
/// (~0.9 ms) keeps exact whole seconds from flooring to the second below.
const TIME_OF_DAY_OFFSET: f64 = 0.50000001;

/// A Julian Day, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// Converts a calendar date to a Julian Day.
    ///
    /// Fields are not range-checked. `day = 40` in January gives the Julian Day
    /// of February 9th.
    pub fn from_calendar(date: &CalendarDate) -> Self {
        let jd = day_number(date) + time_of_day_fraction(date);
        tracing::trace!(%date, jd, "computed julian day");
        Self { jd }
    }

    /// Like [`from_calendar`](Self::from_calendar) but rejects out-of-range fields.
    pub fn try_from_calendar(date: &CalendarDate) -> TimeResult<Self> {
        date.validate()?;
        Ok(Self::from_calendar(date))
    }

    /// Wraps an existing Julian Day value.
    pub fn from_julian_day(jd: f64) -> Self {
        Self { jd }
    }

    pub fn j2000() -> Self {
        Self::from_julian_day(J2000_JD)
    }

    pub fn julian_day(&self) -> f64 {
        self.jd
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        (self.jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
    }

    /// Recovers the calendar date and time of day.
    ///
    /// Seconds are truncated to whole milliseconds. The day and the time of
    /// day are split from the same offset value, so a time within a
    /// millisecond of midnight rolls over into the next date.
    pub fn to_calendar(&self) -> CalendarDate {
        let frac_day = self.jd + TIME_OF_DAY_OFFSET;
        let z = floor(frac_day);
        let a = if z < GREGORIAN_CUTOVER_JD {
            z
        } else {
            let alpha = floor((z - 1867216.25) / 36524.25);
            z + 1.0 + alpha - floor(alpha / 4.0)
        };

        let b = a + 1524.0;
        let c = floor((b - 122.1) / DAYS_PER_JULIAN_YEAR);
        let d = floor(DAYS_PER_JULIAN_YEAR * c);
        let e = floor((b - d) / 30.6001);

        let day = b - d - floor(30.6001 * e);
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        let hour = (frac_day - z) * HOURS_PER_DAY;
        let minute = (hour - floor(hour)) * 60.0;
        let second = (minute - floor(minute)) * 60.0;
        let second = floor(second * 1000.0) / 1000.0;

        CalendarDate {
            year: year as i32,
            month: month as u8,
            day: day as u8,
            hour: floor(hour) as u8,
            minute: floor(minute) as u8,
            second,
        }
    }

    /// Mean sidereal time at Greenwich.
    pub fn sidereal_time(&self) -> StarTime {
        StarTime::from_julian_date(self)
    }

    /// Sidereal time in degrees, in [0, 360).
    pub fn star_time(&self) -> f64 {
        self.sidereal_time().degrees()
    }

    /// Sidereal time in degrees plus `correction_degrees`.
    ///
    /// The correction (e.g. an observer's east longitude) is added after
    /// normalization, so the result may fall outside [0, 360).
    pub fn star_time_corrected(&self, correction_degrees: f64) -> f64 {
        self.sidereal_time().corrected(correction_degrees)
    }
}

/// Julian Day at 0h of the date.
fn day_number(date: &CalendarDate) -> f64 {
    let mut year = date.year as f64;
    let mut month = date.month as f64;
    let day = date.day as f64;

    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let a = floor(year / 100.0);
    let b = if date.is_julian_calendar() {
        0.0
    } else {
        2.0 - a + floor(a / 4.0)
    };

    floor(DAYS_PER_JULIAN_YEAR * (year + 4716.0)) + floor(30.60001 * (month + 1.0)) + day + b
        - 1524.5
}

fn time_of_day_fraction(date: &CalendarDate) -> f64 {
    date.hour as f64 / HOURS_PER_DAY
        + date.minute as f64 / MINUTES_PER_DAY
        + date.second / SECONDS_PER_DAY_F64
}

/// Formats as `Day.Month.Year Hour:Minute:Second`, e.g. `20.3.2010 17:32:0`.
impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.to_calendar();
        write!(
            f,
            "{}.{}.{} {}:{}:{}",
            c.day, c.month, c.year, c.hour, c.minute, c.second
        )
    }
}

impl From<CalendarDate> for JulianDate {
    fn from(date: CalendarDate) -> Self {
        Self::from_calendar(&date)
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_julian_day(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimeError;

    fn jd(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> f64 {
        JulianDate::from_calendar(&CalendarDate::new(year, month, day).with_time(hour, minute, second))
            .julian_day()
    }

    #[test]
    fn test_j2000_epoch() {
        assert_eq!(jd(2000, 1, 1, 12, 0, 0.0), J2000_JD);
        assert_eq!(JulianDate::j2000().julian_day(), J2000_JD);
        assert_eq!(JulianDate::j2000().centuries_since_j2000(), 0.0);
    }

    #[test]
    fn test_known_day_numbers() {
        assert_eq!(jd(2000, 1, 1, 0, 0, 0.0), 2451544.5);
        assert_eq!(jd(1858, 11, 17, 0, 0, 0.0), 2400000.5);
        assert_eq!(jd(1970, 1, 1, 0, 0, 0.0), 2440587.5);
        assert_eq!(jd(333, 1, 27, 12, 0, 0.0), 1842713.0);
        assert_eq!(jd(-4712, 1, 1, 12, 0, 0.0), 0.0);
        assert_eq!(jd(1500, 6, 15, 12, 0, 0.0), 2269099.0);
    }

    #[test]
    fn test_gregorian_cutover() {
        assert_eq!(jd(1582, 10, 4, 0, 0, 0.0), 2299159.5);
        assert_eq!(jd(1582, 10, 15, 0, 0, 0.0), 2299160.5);
    }

    #[test]
    fn test_defaults() {
        let jd = JulianDate::from_calendar(&CalendarDate::default());
        assert_eq!(jd.julian_day(), 1721057.5);
    }

    #[test]
    fn test_time_of_day_fraction() {
        let midnight = jd(2010, 3, 20, 0, 0, 0.0);
        let later = jd(2010, 3, 20, 17, 32, 0.0);
        assert!((later - midnight - (17.0 / 24.0 + 32.0 / 1440.0)).abs() < 1e-8);

        let almost_midnight = jd(1999, 12, 31, 23, 59, 59.0);
        assert!((jd(2000, 1, 1, 0, 0, 0.0) - almost_midnight - 1.0 / 86400.0).abs() < 1e-8);
    }

    #[test]
    fn test_out_of_range_day_rolls_forward() {
        assert_eq!(jd(2000, 1, 40, 0, 0, 0.0), jd(2000, 2, 9, 0, 0, 0.0));
    }

    #[test]
    fn test_try_from_calendar() {
        assert!(JulianDate::try_from_calendar(&CalendarDate::new(2000, 1, 1)).is_ok());
        assert!(matches!(
            JulianDate::try_from_calendar(&CalendarDate::new(2000, 1, 40)),
            Err(TimeError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_to_calendar() {
        let date = JulianDate::from_julian_day(2455276.230555556).to_calendar();
        assert_eq!((date.year, date.month, date.day), (2010, 3, 20));
        assert_eq!((date.hour, date.minute), (17, 32));
        assert_eq!(date.second, 0.0);

        let date = JulianDate::from_julian_day(2299159.5).to_calendar();
        assert_eq!((date.year, date.month, date.day), (1582, 10, 4));
        let date = JulianDate::from_julian_day(2299160.5).to_calendar();
        assert_eq!((date.year, date.month, date.day), (1582, 10, 15));
    }

    #[test]
    fn test_to_calendar_rolls_over_midnight() {
        let date = CalendarDate::new(1999, 12, 31).with_time(23, 59, 59.9995);
        assert!(date.validate().is_ok());

        let jd = JulianDate::from_calendar(&date);
        let recovered = jd.to_calendar();
        assert_eq!((recovered.year, recovered.month, recovered.day), (2000, 1, 1));
        assert_eq!((recovered.hour, recovered.minute), (0, 0));
        assert!(recovered.second < 0.001);
        assert_eq!(jd.to_string(), "1.1.2000 0:0:0");

        let date = CalendarDate::new(2010, 3, 20).with_time(23, 59, 59.999);
        let recovered = JulianDate::from_calendar(&date).to_calendar();
        assert_eq!((recovered.day, recovered.hour, recovered.minute), (20, 23, 59));
        assert!((recovered.second - 59.999).abs() < 0.002);
    }

    #[test]
    fn test_display() {
        assert_eq!(JulianDate::j2000().to_string(), "1.1.2000 12:0:0");
        assert_eq!(
            JulianDate::from(CalendarDate::new(2000, 1, 1)).to_string(),
            "1.1.2000 0:0:0"
        );
        assert_eq!(
            JulianDate::from(CalendarDate::new(1500, 6, 15).with_time(12, 0, 0.0)).to_string(),
            "15.6.1500 12:0:0"
        );
        assert_eq!(
            JulianDate::from(CalendarDate::new(1999, 12, 31).with_time(23, 59, 59.0)).to_string(),
            "31.12.1999 23:59:59"
        );
    }

    #[test]
    fn test_ordering() {
        let a = JulianDate::from(CalendarDate::new(1999, 12, 31));
        let b = JulianDate::from(CalendarDate::new(2000, 1, 1));
        assert!(a < b);
    }

    #[test]
    fn test_star_time_delegates() {
        let jd = JulianDate::j2000();
        assert_eq!(jd.star_time(), jd.sidereal_time().degrees());
        assert_eq!(jd.star_time_corrected(15.0), jd.star_time() + 15.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = JulianDate::from(CalendarDate::new(2010, 3, 20).with_time(17, 32, 0.0));
        let json = serde_json::to_string(&original).unwrap();
        let restored: JulianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
