//! Grid variants.
//!
//! Each variant extends the digit list of the previous one and hands it to
//! the same placement primitive:
//!
//! | view            | digits                                                    |
//! |-----------------|-----------------------------------------------------------|
//! | natal           | birth-date digits                                         |
//! | basic           | natal + root (only when absent from the natal digits)     |
//! | destiny         | basic + destiny (always)                                  |
//! | mahadasha       | destiny + Mahadasha on the reference date                 |
//! | personal year   | destiny + Mahadasha, Antardasha on 1 July of the year     |
//! | monthly         | destiny + Mahadasha, Antardasha, Pratyantardasha on the 15th |
//!
//! Period views read fixed reference dates inside the target year or month so
//! that a grid for any past or future period is well defined. A level with no
//! period on that date contributes nothing.

use nd_core::errors::Result;
use nd_core::{DestinyNumber, RootNumber};
use nd_dasha::{BirthFacts, DashaLevel, DashaSnapshot, DashaTimeline};
use nd_time::{Date, ALL_MONTHS};

use crate::grid::{ColoredDigit, GridView, LoShuGrid};
use crate::natal::natal_digits;
use crate::source::Source;

/// Month and day read by personal-year grids.
pub const PERSONAL_YEAR_REFERENCE: (u8, u8) = (7, 1);

/// Day of the month read by monthly grids.
pub const MONTHLY_REFERENCE_DAY: u8 = 15;

/// Natal digits plus the root number when it is not already among them.
pub fn basic_digits(birth: &BirthFacts, root: RootNumber) -> Vec<ColoredDigit> {
    let mut digits = natal_digits(birth);
    if !digits.iter().any(|d| d.value == root) {
        digits.push(ColoredDigit::new(root, Source::Root));
    }
    digits
}

/// Basic digits plus the destiny number, duplicates included.
pub fn destiny_digits(
    birth: &BirthFacts,
    root: RootNumber,
    destiny: DestinyNumber,
) -> Vec<ColoredDigit> {
    let mut digits = basic_digits(birth, root);
    digits.push(ColoredDigit::new(destiny, Source::Destiny));
    digits
}

/// Grid of the birth-date digits.
pub fn natal_grid(birth: &BirthFacts) -> LoShuGrid {
    LoShuGrid::from_digits(GridView::Natal, &natal_digits(birth))
}

/// Natal grid plus the root number.
pub fn basic_grid(birth: &BirthFacts, root: RootNumber) -> LoShuGrid {
    LoShuGrid::from_digits(GridView::Basic, &basic_digits(birth, root))
}

/// Basic grid plus the destiny number.
pub fn destiny_grid(birth: &BirthFacts, root: RootNumber, destiny: DestinyNumber) -> LoShuGrid {
    LoShuGrid::from_digits(GridView::Destiny, &destiny_digits(birth, root, destiny))
}

fn period_grid(
    view: GridView,
    timeline: &DashaTimeline,
    destiny: DestinyNumber,
    snapshot: &DashaSnapshot,
    levels: &[DashaLevel],
) -> LoShuGrid {
    let mut digits = destiny_digits(&timeline.birth, timeline.root_number, destiny);
    for &level in levels {
        match snapshot.number(level) {
            Some(number) => digits.push(ColoredDigit::new(number, Source::from(level))),
            None => tracing::debug!(
                level = level.name(),
                date = %snapshot.date,
                "no active period, cell left out"
            ),
        }
    }
    LoShuGrid::from_digits(view, &digits)
}

/// Destiny grid plus the Mahadasha active on `date` (usually today).
pub fn mahadasha_grid(timeline: &DashaTimeline, destiny: DestinyNumber, date: Date) -> LoShuGrid {
    let snapshot = timeline.snapshot(date);
    period_grid(
        GridView::Mahadasha { date },
        timeline,
        destiny,
        &snapshot,
        &[DashaLevel::Mahadasha],
    )
}

/// Destiny grid plus the Mahadasha and Antardasha active on 1 July of `year`.
pub fn personal_year_grid(
    timeline: &DashaTimeline,
    destiny: DestinyNumber,
    year: u16,
) -> Result<LoShuGrid> {
    let (month, day) = PERSONAL_YEAR_REFERENCE;
    let snapshot = timeline.snapshot(Date::from_ymd(year, month, day)?);
    Ok(period_grid(
        GridView::PersonalYear { year },
        timeline,
        destiny,
        &snapshot,
        &[DashaLevel::Mahadasha, DashaLevel::Antardasha],
    ))
}

/// Destiny grid plus every level active on the 15th of `month` in `year`.
pub fn monthly_grid(
    timeline: &DashaTimeline,
    destiny: DestinyNumber,
    year: u16,
    month: u8,
) -> Result<LoShuGrid> {
    let snapshot = timeline.snapshot(Date::from_ymd(year, month, MONTHLY_REFERENCE_DAY)?);
    Ok(period_grid(
        GridView::Monthly { year, month },
        timeline,
        destiny,
        &snapshot,
        &DashaLevel::ALL,
    ))
}

/// Personal-year grids for every year in `from_year ..= to_year`.
pub fn yearly_grids(
    timeline: &DashaTimeline,
    destiny: DestinyNumber,
    from_year: u16,
    to_year: u16,
) -> Result<Vec<LoShuGrid>> {
    (from_year..=to_year)
        .map(|year| personal_year_grid(timeline, destiny, year))
        .collect()
}

/// The twelve monthly grids of `year`.
pub fn monthly_grids_for_year(
    timeline: &DashaTimeline,
    destiny: DestinyNumber,
    year: u16,
) -> Result<Vec<LoShuGrid>> {
    ALL_MONTHS
        .iter()
        .map(|month| monthly_grid(timeline, destiny, year, month.number()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_dasha::DashaConfig;

    #[test]
    fn root_added_only_when_absent() {
        let birth = BirthFacts::new(5, 1, 2000).unwrap();
        // 5 is already a natal digit
        let with_dup = basic_digits(&birth, 5);
        assert!(with_dup.iter().all(|d| d.source == Source::Natal));
        // 7 is not
        let with_root = basic_digits(&birth, 7);
        assert_eq!(with_root.last(), Some(&ColoredDigit::new(7, Source::Root)));
    }

    #[test]
    fn destiny_always_added() {
        let birth = BirthFacts::new(5, 1, 2000).unwrap();
        let digits = destiny_digits(&birth, 5, 2);
        assert_eq!(digits.last(), Some(&ColoredDigit::new(2, Source::Destiny)));
        assert_eq!(digits.len(), 4);
    }

    #[test]
    fn out_of_horizon_period_grid_has_only_destiny_digits() {
        let birth = BirthFacts::new(5, 1, 2000).unwrap();
        let tl = DashaTimeline::compute(birth, 5, DashaConfig::default().with_years_to_calculate(5));
        let grid = personal_year_grid(&tl, 3, 1990).unwrap();
        assert_eq!(grid.len(), destiny_grid(&birth, 5, 3).len());
        assert!(grid.digits_from(Source::Mahadasha).is_empty());
        assert!(grid.digits_from(Source::Antardasha).is_empty());
    }

    #[test]
    fn invalid_month_is_an_error() {
        let birth = BirthFacts::new(5, 1, 2000).unwrap();
        let tl = DashaTimeline::compute(birth, 5, DashaConfig::default());
        assert!(monthly_grid(&tl, 3, 2020, 13).is_err());
    }
}
