//! Boundary formatting and parsing.
//!
//! Inside the library dates are always [`Date`] values. They are turned into
//! strings only where they leave it: the canonical `"D MMM YYYY"` form
//! (`"5 Jan 1998"`), ISO `YYYY-MM-DD` for birth-date input, and the
//! `"H:00 AM/PM"` labels of hourly readings.

use nd_core::errors::{Error, Result};

use crate::date::Date;
use crate::month::Month;

/// Format a date as `"D MMM YYYY"` (e.g. `"5 Jan 1998"`).
pub fn format_date(date: Date) -> String {
    date.to_string()
}

/// Parse a `"D MMM YYYY"` string produced by [`format_date`].
///
/// The month abbreviation (or full name) is matched case-insensitively and
/// surrounding whitespace is ignored.
///
/// # Example
/// ```
/// use nd_time::{parse_date, Date};
/// assert_eq!(parse_date("5 Jan 1998").unwrap(), Date::from_ymd(1998, 1, 5).unwrap());
/// ```
pub fn parse_date(s: &str) -> Result<Date> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(Error::parse(s, "expected \"D MMM YYYY\""));
    };
    let day: u8 = day
        .parse()
        .map_err(|_| Error::parse(s, format!("invalid day {day:?}")))?;
    let month =
        Month::from_name(month).ok_or_else(|| Error::parse(s, format!("unknown month {month:?}")))?;
    let year: u16 = year
        .parse()
        .map_err(|_| Error::parse(s, format!("invalid year {year:?}")))?;
    Date::from_ymd(year, month.number(), day)
}

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
pub fn parse_iso_date(s: &str) -> Result<Date> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(Error::parse(s, "expected \"YYYY-MM-DD\""));
    };
    let year: u16 = year
        .parse()
        .map_err(|_| Error::parse(s, format!("invalid year {year:?}")))?;
    let month: u8 = month
        .parse()
        .map_err(|_| Error::parse(s, format!("invalid month {month:?}")))?;
    let day: u8 = day
        .parse()
        .map_err(|_| Error::parse(s, format!("invalid day {day:?}")))?;
    Date::from_ymd(year, month, day)
}

/// Label an hour of the day (0–23) in 12-hour form: `"12:00 AM"`,
/// `"1:00 AM"`, …, `"12:00 PM"`, …, `"11:00 PM"`.
pub fn format_hour_label(hour: u8) -> String {
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    format!("{h12}:00 {meridiem}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = Date::from_ymd(2023, 8, 15).unwrap();
        assert_eq!(format_date(d), "15 Aug 2023");
    }

    #[test]
    fn test_parse_date() {
        let d = Date::from_ymd(1998, 1, 5).unwrap();
        assert_eq!(parse_date("5 Jan 1998").unwrap(), d);
        assert_eq!(parse_date("  05 jan 1998 ").unwrap(), d);
        assert_eq!(parse_date("5 January 1998").unwrap(), d);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(parse_date("5 Jan"), Err(Error::Parse { .. })));
        assert!(matches!(parse_date("5 Foo 1998"), Err(Error::Parse { .. })));
        assert!(matches!(parse_date("x Jan 1998"), Err(Error::Parse { .. })));
        assert!(matches!(parse_date("30 Feb 1998"), Err(Error::Date(_))));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2000-01-05").unwrap(),
            Date::from_ymd(2000, 1, 5).unwrap()
        );
        assert!(parse_iso_date("bad").is_err());
        assert!(parse_iso_date("2000-13-05").is_err());
    }

    #[test]
    fn test_hour_labels() {
        assert_eq!(format_hour_label(0), "12:00 AM");
        assert_eq!(format_hour_label(1), "1:00 AM");
        assert_eq!(format_hour_label(11), "11:00 AM");
        assert_eq!(format_hour_label(12), "12:00 PM");
        assert_eq!(format_hour_label(13), "1:00 PM");
        assert_eq!(format_hour_label(23), "11:00 PM");
    }
}
