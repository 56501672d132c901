use crate::{CalendarDate, JulianDate};
use std::sync::LazyLock;

/// Calendar instant of the March 2010 equinox, 2010-03-20 17:32:00.
pub const VERNAL_EQUINOX_2010_DATE: CalendarDate = CalendarDate {
    year: 2010,
    month: 3,
    day: 20,
    hour: 17,
    minute: 32,
    second: 0.0,
};

/// Julian Day of [`VERNAL_EQUINOX_2010_DATE`], computed on first access.
pub static VERNAL_EQUINOX_2010: LazyLock<JulianDate> = LazyLock::new(vernal_equinox_2010);

pub fn vernal_equinox_2010() -> JulianDate {
    JulianDate::from_calendar(&VERNAL_EQUINOX_2010_DATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equinox_matches_fresh_conversion() {
        let fresh = JulianDate::from_calendar(
            &CalendarDate::new(2010, 3, 20).with_time(17, 32, 0.0),
        );
        assert_eq!(VERNAL_EQUINOX_2010.julian_day(), fresh.julian_day());
        assert_eq!(*VERNAL_EQUINOX_2010, vernal_equinox_2010());
    }

    #[test]
    fn test_equinox_value() {
        assert!((VERNAL_EQUINOX_2010.julian_day() - 2455276.230555556).abs() < 1e-8);
        assert_eq!(VERNAL_EQUINOX_2010.to_string(), "20.3.2010 17:32:0");
    }
}
