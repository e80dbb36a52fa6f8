//! Integration tests for `Date`, its boundary formats, and serde.

use nd_time::{format_date, parse_date, parse_iso_date, Date, Month, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn consecutive_days_are_contiguous_across_years() {
    let start = date(1899, 12, 1);
    let end = date(2101, 3, 1);
    let mut counter = start;
    let mut previous = None;
    while counter <= end {
        if let Some(p) = previous {
            assert_eq!(counter - p, 1, "gap between {p:?} and {counter:?}");
            assert!(counter > p);
        }
        let (y, m, d) = counter.ymd();
        assert_eq!(date(y, m, d), counter);
        previous = Some(counter);
        counter = counter + 1;
    }
}

#[test]
fn weekdays_cycle_every_seven_days() {
    let monday = date(2024, 1, 1);
    assert_eq!(monday.weekday(), Weekday::Monday);
    for offset in 0..70 {
        let d = monday + offset;
        let expected = Weekday::from_ordinal((offset % 7 + 1) as u8).unwrap();
        assert_eq!(d.weekday(), expected, "{d:?}");
    }
}

#[test]
fn known_weekdays() {
    assert_eq!(date(2000, 1, 5).weekday(), Weekday::Wednesday);
    assert_eq!(date(1998, 1, 5).weekday(), Weekday::Monday);
    assert_eq!(date(2023, 8, 15).weekday(), Weekday::Tuesday);
    assert_eq!(date(1969, 7, 20).weekday(), Weekday::Sunday);
}

#[test]
fn month_enum_from_date() {
    assert_eq!(date(2023, 8, 15).month_enum(), Month::August);
}

#[test]
fn iso_and_boundary_formats_agree() {
    let d = parse_iso_date("2000-01-05").unwrap();
    assert_eq!(format_date(d), "5 Jan 2000");
}

#[test]
fn serde_uses_boundary_string() {
    let d = date(1998, 1, 5);
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, "\"5 Jan 1998\"");
    let back: Date = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
    assert!(serde_json::from_str::<Date>("\"1998-01-05\"").is_err());
}

proptest! {
    #[test]
    fn format_then_parse_is_identity(serial in 1i32..=3_652_059) {
        let d = Date::from_serial(serial).unwrap();
        prop_assert_eq!(parse_date(&format_date(d)).unwrap(), d);
    }

    #[test]
    fn ymd_roundtrip(serial in 1i32..=3_652_059) {
        let d = Date::from_serial(serial).unwrap();
        let (y, m, day) = d.ymd();
        prop_assert_eq!(Date::from_ymd(y, m, day).unwrap(), d);
    }
}
