//! Active-period lookups.
//!
//! Lookups scan the generated timelines linearly. A date outside every
//! computed range yields `None`, which is a normal "nothing active" answer.

use nd_time::Date;

use crate::mahadasha::mahadasha_for_date;
use crate::types::{DashaPeriod, DashaSnapshot, MahadashaPeriod, YearBlock};

/// The Antardasha period containing `date`.
pub fn antardasha_for_date(periods: &[DashaPeriod], date: Date) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.contains(date))
}

/// The Pratyantardasha sub-period containing `date`.
pub fn pratyantardasha_for_date(blocks: &[YearBlock], date: Date) -> Option<&DashaPeriod> {
    blocks
        .iter()
        .filter(|block| block.contains(date))
        .flat_map(|block| block.periods.iter())
        .find(|p| p.contains(date))
}

/// The periods of every level active on `date`.
pub fn snapshot(
    mahadasha: &[MahadashaPeriod],
    antardasha: &[DashaPeriod],
    pratyantardasha: &[YearBlock],
    date: Date,
) -> DashaSnapshot {
    DashaSnapshot {
        date,
        mahadasha: mahadasha_for_date(mahadasha, date).copied(),
        antardasha: antardasha_for_date(antardasha, date).copied(),
        pratyantardasha: pratyantardasha_for_date(pratyantardasha, date).copied(),
    }
}
