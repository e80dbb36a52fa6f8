//! The evaluation date.
//!
//! Current-period views ask for "today". That is the date pinned in
//! [`nd_core::Settings`] when one is set, and the local civil date otherwise.

use chrono::{Datelike, Local};
use nd_core::errors::Result;
use nd_core::{ScopedEvaluationDate, Settings};

use crate::date::Date;

/// Return the evaluation date: the pinned one, or the local civil date.
pub fn evaluation_date() -> Result<Date> {
    match Settings::instance().evaluation_date_serial() {
        Some(serial) => Date::from_serial(serial),
        // `num_days_from_ce` uses the same day count as `Date::serial`.
        None => Date::from_serial(Local::now().date_naive().num_days_from_ce()),
    }
}

/// Pin the evaluation date to `date` until the returned guard is dropped.
pub fn pin_evaluation_date(date: Date) -> ScopedEvaluationDate {
    ScopedEvaluationDate::new(date.serial())
}
