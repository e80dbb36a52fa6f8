//! Antardasha generator.
//!
//! One period per birth-anniversary year, running from the birthday in the
//! target year to the day before the next birthday. Its number is
//!
//! ```text
//! reduce(reduce(day) + month + (year mod 100) + weekday_number(birthday))
//! ```
//!
//! where `birthday` is the birthday as it falls in the target year.

use nd_core::errors::Result;
use nd_core::{reduce, Number};
use nd_time::Date;

use crate::types::{BirthFacts, DashaPeriod};
use crate::weekday_number::weekday_number;

/// Number of the Antardasha starting on `birthday` (the birth date moved to
/// the target year).
pub fn antardasha_number(birth: &BirthFacts, birthday: Date) -> Number {
    let sum = u64::from(reduce(u64::from(birth.day())))
        + u64::from(birth.month())
        + u64::from(birthday.year() % 100)
        + u64::from(weekday_number(birthday.weekday()));
    reduce(sum)
}

/// The Antardasha period for `target_year`.
///
/// Fails only when the period would leave the supported date range.
pub fn antardasha_period(birth: &BirthFacts, target_year: u16) -> Result<DashaPeriod> {
    let from = birth.birthday_in(target_year)?;
    let to = birth.birthday_in(target_year + 1)?.pred()?;
    Ok(DashaPeriod {
        from,
        to,
        number: antardasha_number(birth, from),
    })
}

/// Generate one Antardasha per year from the birth year to
/// `birth_year + years_to_calculate`, both inclusive.
#[tracing::instrument(skip(birth), fields(birth = %birth.date()))]
pub fn antardasha_timeline(birth: &BirthFacts, years_to_calculate: u16) -> Vec<DashaPeriod> {
    let first = birth.year();
    let last = first.saturating_add(years_to_calculate);
    let mut periods = Vec::with_capacity(usize::from(years_to_calculate) + 1);
    for target_year in first..=last {
        match antardasha_period(birth, target_year) {
            Ok(period) => periods.push(period),
            Err(e) => {
                tracing::warn!(target_year, error = %e, "antardasha horizon clipped");
                break;
            }
        }
    }
    tracing::debug!(periods = periods.len(), "antardasha timeline generated");
    periods
}
