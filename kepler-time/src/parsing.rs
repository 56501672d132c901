use crate::{CalendarDate, TimeError, TimeResult};
use std::str::FromStr;

const MAX_DATETIME_LENGTH: usize = 40;

/// Parses `[-]YYYY-MM-DD[(T| )HH:MM[:SS[.fff]]][Z]`.
///
/// Only the syntax is checked. A well-formed but impossible date such as
/// `2000-02-31` parses and can be rejected with [`CalendarDate::validate`].
pub fn parse_datetime(s: &str) -> TimeResult<CalendarDate> {
    let s = s.trim();

    if s.is_empty() {
        return Err(TimeError::ParseError("Empty input".to_string()));
    }
    if s.len() > MAX_DATETIME_LENGTH {
        return Err(TimeError::ParseError("Input too long".to_string()));
    }

    let s = s.strip_suffix('Z').unwrap_or(s);

    let (date_part, time_part) = match s.find(['T', ' ']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let (negative, unsigned_date) = match date_part.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, date_part.strip_prefix('+').unwrap_or(date_part)),
    };

    let date_components: Vec<&str> = unsigned_date.split('-').collect();
    if date_components.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            date_part
        )));
    }

    let magnitude: i32 = parse_digits(date_components[0], "year", 1..=6)?;
    let year = if negative { -magnitude } else { magnitude };
    let month: u8 = parse_digits(date_components[1], "month", 1..=2)?;
    let day: u8 = parse_digits(date_components[2], "day", 1..=2)?;

    let mut date = CalendarDate::new(year, month, day);

    if let Some(time_part) = time_part {
        let time_components: Vec<&str> = time_part.split(':').collect();
        if !(2..=3).contains(&time_components.len()) {
            return Err(TimeError::ParseError(format!(
                "Invalid time format: '{}'. Expected HH:MM[:SS]",
                time_part
            )));
        }

        date.hour = parse_digits(time_components[0], "hour", 1..=2)?;
        date.minute = parse_digits(time_components[1], "minute", 1..=2)?;
        if let Some(seconds) = time_components.get(2) {
            date.second = parse_seconds(seconds)?;
        }
    }

    Ok(date)
}

fn parse_digits<T: FromStr>(
    field: &str,
    name: &str,
    width: std::ops::RangeInclusive<usize>,
) -> TimeResult<T> {
    if !width.contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!(
            "Invalid {}: '{}'",
            name, field
        )));
    }
    field
        .parse()
        .map_err(|_| TimeError::ParseError(format!("Invalid {}: '{}'", name, field)))
}

fn parse_seconds(field: &str) -> TimeResult<f64> {
    let (whole, frac) = match field.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (field, None),
    };

    let valid_whole = (1..=2).contains(&whole.len()) && whole.bytes().all(|b| b.is_ascii_digit());
    let valid_frac = frac.map_or(true, |f| {
        !f.is_empty() && f.len() <= 9 && f.bytes().all(|b| b.is_ascii_digit())
    });
    if !valid_whole || !valid_frac {
        return Err(TimeError::ParseError(format!("Invalid second: '{}'", field)));
    }

    field
        .parse()
        .map_err(|_| TimeError::ParseError(format!("Invalid second: '{}'", field)))
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_datetime(s)
    }
}
