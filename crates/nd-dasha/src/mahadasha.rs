//! Mahadasha generator.
//!
//! Starting at the birth year with the root number, each era lasts as many
//! years as its own number; the next era takes the next number in the
//! 1 → 9 → 1 cycle. Eras are emitted until the start year passes
//! `birth_year + years_to_calculate`.

use nd_core::{next_in_cycle, Number, RootNumber};
use nd_time::Date;

use crate::types::MahadashaPeriod;

/// Generate the Mahadasha eras for `birth_year` and `root_number`.
///
/// Returns an empty timeline when `root_number` is outside `[1, 9]`.
///
/// # Example
/// ```
/// use nd_dasha::mahadasha_timeline;
/// let eras = mahadasha_timeline(2000, 5, 100);
/// let starts: Vec<(u16, u8)> = eras.iter().take(3).map(|e| (e.from_year, e.number)).collect();
/// assert_eq!(starts, vec![(2000, 5), (2005, 6), (2011, 7)]);
/// ```
#[tracing::instrument]
pub fn mahadasha_timeline(
    birth_year: u16,
    root_number: RootNumber,
    years_to_calculate: u16,
) -> Vec<MahadashaPeriod> {
    if !(1..=9).contains(&root_number) {
        tracing::warn!("root number outside 1..=9, no mahadasha generated");
        return Vec::new();
    }
    let horizon = birth_year.saturating_add(years_to_calculate);
    let mut eras = Vec::new();
    let mut year = birth_year;
    let mut number: Number = root_number;
    loop {
        let to_year = year.saturating_add(u16::from(number) - 1);
        eras.push(MahadashaPeriod {
            from_year: year,
            to_year,
            number,
        });
        match to_year.checked_add(1) {
            Some(next_start) if next_start <= horizon => year = next_start,
            _ => break,
        }
        number = next_in_cycle(number);
    }
    tracing::debug!(eras = eras.len(), "mahadasha timeline generated");
    eras
}

/// The era in force during `year`: the last era starting on or before it.
///
/// Years before the first era yield `None`. Years after the horizon keep
/// resolving to the final era.
pub fn mahadasha_for_year(eras: &[MahadashaPeriod], year: u16) -> Option<&MahadashaPeriod> {
    eras.iter().rev().find(|era| era.from_year <= year)
}

/// The era in force on `date` (eras change on 1 January).
pub fn mahadasha_for_date(eras: &[MahadashaPeriod], date: Date) -> Option<&MahadashaPeriod> {
    mahadasha_for_year(eras, date.year())
}
