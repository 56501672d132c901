//! Calendar date and time-of-day input.
//!
//! Years are astronomical (year 0 is 1 BC, year -1 is 2 BC). Dates up to
//! 1582-10-04 are read in the Julian calendar, later dates in the Gregorian
//! calendar; 1582-10-05 through 1582-10-14 do not exist in either.

use kepler_core::constants::GREGORIAN_CUTOVER_DATE;
use kepler_core::{KeplerError, KeplerResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A calendar date with time of day.
///
/// Every field has a default (`0000-01-01 00:00:00`), so partial dates can be
/// built with struct-update syntax:
///
/// ```
/// use kepler_time::CalendarDate;
///
/// let date = CalendarDate { year: 2010, month: 3, day: 20, hour: 17, minute: 32, ..Default::default() };
/// assert_eq!(date.second, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self {
            year: 0,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0.0,
        }
    }
}

impl CalendarDate {
    /// Midnight at the start of the given day.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            ..Default::default()
        }
    }

    pub fn with_time(self, hour: u8, minute: u8, second: f64) -> Self {
        Self {
            hour,
            minute,
            second,
            ..self
        }
    }

    /// The `year * 10000 + month * 100 + day` composite used to pick the calendar.
    pub(crate) fn composite(&self) -> f64 {
        self.year as f64 * 10000.0 + self.month as f64 * 100.0 + self.day as f64
    }

    pub fn is_julian_calendar(&self) -> bool {
        self.composite() < GREGORIAN_CUTOVER_DATE
    }

    /// Checks every field against its calendar range.
    ///
    /// Construction never calls this; out-of-range fields are otherwise carried
    /// through the Julian Day arithmetic unchanged.
    pub fn validate(&self) -> KeplerResult<()> {
        let err = |reason: &str| KeplerError::invalid_date(self.year, self.month, self.day, reason);

        if !(1..=12).contains(&self.month) {
            return Err(err("month must be in 1..=12"));
        }
        let max_day = days_in_month(self.year, self.month);
        if self.day < 1 || self.day > max_day {
            return Err(err(&format!("day must be in 1..={}", max_day)));
        }
        if self.year == 1582 && self.month == 10 && (5..=14).contains(&self.day) {
            return Err(err("dropped by the Gregorian calendar reform"));
        }
        if self.hour > 23 {
            return Err(err("hour must be in 0..=23"));
        }
        if self.minute > 59 {
            return Err(err("minute must be in 0..=59"));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(err("second must be in [0, 60)"));
        }
        Ok(())
    }
}

/// Number of days in `month` of `year`, Julian leap rule before 1583.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    if year < 1583 {
        year.rem_euclid(4) == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
