//! Daily and hourly resolver.
//!
//! The daily number is the active Pratyantardasha number plus the weekday
//! number, reduced. Each hour of that day adds its 12-hour clock value
//! (midnight and noon count as 12) to the daily number, reduced again.

use nd_core::{reduce, Number};
use nd_time::{format_hour_label, Date, Weekday};
use serde::{Deserialize, Serialize};

use crate::query::pratyantardasha_for_date;
use crate::types::YearBlock;
use crate::weekday_number::weekday_number;

/// Hours in a civil day.
pub const HOURS_PER_DAY: u8 = 24;

/// The reading for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyResult {
    /// The day.
    pub date: Date,
    /// Daily number (1–9).
    pub daily_value: Number,
    /// The Pratyantardasha number in force on that day.
    pub pratyantardasha: Number,
    /// Day of the week.
    pub weekday: Weekday,
    /// The weekday's number.
    pub weekday_number: Number,
}

impl DailyResult {
    /// English weekday name (`"Tuesday"`).
    pub fn weekday_name(&self) -> &'static str {
        self.weekday.name()
    }
}

/// The reading for one hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyResult {
    /// Hour of the day, 0–23.
    pub hour: u8,
    /// `"H:00 AM/PM"` label.
    pub label: String,
    /// Hourly number (1–9).
    pub value: Number,
}

/// `reduce(pratyantardasha + weekday_number(weekday))`.
pub fn daily_value(pratyantardasha: Number, weekday: Weekday) -> Number {
    reduce(u64::from(pratyantardasha) + u64::from(weekday_number(weekday)))
}

/// Resolve the daily reading for `date`, or `None` outside the timeline.
pub fn daily_for_date(blocks: &[YearBlock], date: Date) -> Option<DailyResult> {
    let period = pratyantardasha_for_date(blocks, date)?;
    let weekday = date.weekday();
    Some(DailyResult {
        date,
        daily_value: daily_value(period.number, weekday),
        pratyantardasha: period.number,
        weekday,
        weekday_number: weekday_number(weekday),
    })
}

/// The 24 hourly readings derived from a daily number.
pub fn hourly_for_daily(daily_value: Number) -> Vec<HourlyResult> {
    (0..HOURS_PER_DAY)
        .map(|hour| {
            let h12 = match hour % 12 {
                0 => 12,
                h => h,
            };
            HourlyResult {
                hour,
                label: format_hour_label(hour),
                value: reduce(u64::from(daily_value) + u64::from(h12)),
            }
        })
        .collect()
}

/// The 24 hourly readings for `date`, or `None` outside the timeline.
pub fn hourly_for_date(blocks: &[YearBlock], date: Date) -> Option<Vec<HourlyResult>> {
    daily_for_date(blocks, date).map(|daily| hourly_for_daily(daily.daily_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DashaPeriod;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn single_block(from: Date, number: Number) -> Vec<YearBlock> {
        let period = DashaPeriod {
            from,
            to: from + 29,
            number,
        };
        vec![YearBlock {
            year: from.year(),
            from,
            to: period.to,
            antardasha: number,
            periods: vec![period],
        }]
    }

    #[test]
    fn daily_value_adds_weekday_number() {
        // Tuesday (9) + 4 = 13 → 4
        assert_eq!(daily_value(4, Weekday::Tuesday), 4);
        // Sunday (1) + 8 = 9
        assert_eq!(daily_value(8, Weekday::Sunday), 9);
    }

    #[test]
    fn daily_for_date_inside_and_outside() {
        let blocks = single_block(date(2023, 8, 1), 6);
        let d = date(2023, 8, 15); // Tuesday
        let daily = daily_for_date(&blocks, d).unwrap();
        assert_eq!(daily.pratyantardasha, 6);
        assert_eq!(daily.weekday, Weekday::Tuesday);
        assert_eq!(daily.weekday_name(), "Tuesday");
        assert_eq!(daily.weekday_number, 9);
        assert_eq!(daily.daily_value, 6); // 6 + 9 = 15 → 6
        assert!(daily_for_date(&blocks, date(2023, 7, 31)).is_none());
        assert!(daily_for_date(&blocks, date(2023, 8, 31)).is_none());
    }

    #[test]
    fn twenty_four_hours() {
        let hours = hourly_for_daily(3);
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[0].label, "12:00 AM");
        assert_eq!(hours[0].value, 6); // 3 + 12 = 15 → 6
        assert_eq!(hours[1].value, 4); // 3 + 1
        assert_eq!(hours[6].value, 9); // 3 + 6
        assert_eq!(hours[12].label, "12:00 PM");
        assert_eq!(hours[12].value, hours[0].value);
        assert_eq!(hours[23].label, "11:00 PM");
        assert_eq!(hours[23].value, 5); // 3 + 11 = 14 → 5
        for (i, h) in hours.iter().enumerate() {
            assert_eq!(usize::from(h.hour), i);
            assert_eq!(h.value, hours[(i + 12) % 24].value);
        }
    }

    #[test]
    fn hourly_for_date_outside_is_none() {
        let blocks = single_block(date(2023, 8, 1), 6);
        assert!(hourly_for_date(&blocks, date(2024, 1, 1)).is_none());
        assert_eq!(hourly_for_date(&blocks, date(2023, 8, 2)).unwrap().len(), 24);
    }
}
