//! Pratyantardasha generator.
//!
//! Each Antardasha year is cut into sub-periods of whole 30-day "months".
//! A sub-period ruled by `n` is worth `8 * n` days plus the days carried from
//! the previous sub-period; the whole months are spent and the remainder
//! (`total % 30`) carries into the next sub-period of the same year. The carry
//! starts each year at the birth day, and the numbering starts at the
//! previous year's Antardasha number, advancing 1 → 9 → 1.
//!
//! A sub-period worth less than 30 days spends zero months. It is still
//! emitted, clamped to a single day, so the sequence always advances.

use nd_core::{next_in_cycle, Number};

use crate::config::DashaConfig;
use crate::types::{DashaPeriod, YearBlock};

/// Days each unit of the ruling number is worth.
const DAYS_PER_NUMBER: u32 = 8;

/// Days in one sub-period "month".
const DAYS_PER_MONTH: u32 = 30;

/// Subdivide one Antardasha year.
///
/// `seed_number` rules the first sub-period; `birth_day` is the initial
/// carry. At most `max_periods` sub-periods are produced.
pub fn year_block(
    birth_day: u8,
    parent: &DashaPeriod,
    seed_number: Number,
    max_periods: usize,
) -> YearBlock {
    let mut periods = Vec::new();
    let mut current = parent.from;
    let mut number = seed_number;
    let mut carry = u32::from(birth_day);

    while current <= parent.to && periods.len() < max_periods {
        let total = DAYS_PER_NUMBER * u32::from(number) + carry;
        let months = total / DAYS_PER_MONTH;
        carry = total % DAYS_PER_MONTH;

        // A zero-month period would end before it starts; clamp it to one day.
        let length = (months * DAYS_PER_MONTH) as i32;
        let span = (length - 1).max(0).min(parent.to - current);
        let end = current + span;

        periods.push(DashaPeriod {
            from: current,
            to: end,
            number,
        });
        number = next_in_cycle(number);
        if end == parent.to {
            break;
        }
        current = end + 1;
    }

    if periods.last().map_or(true, |p| p.to < parent.to) {
        tracing::warn!(
            from = %parent.from,
            to = %parent.to,
            periods = periods.len(),
            "pratyantardasha cap reached before the end of the year"
        );
    }

    YearBlock {
        year: parent.from.year(),
        from: parent.from,
        to: parent.to,
        antardasha: parent.number,
        periods,
    }
}

/// Generate one [`YearBlock`] per Antardasha period.
///
/// Each block is seeded with the previous period's Antardasha number; the
/// first block, having no predecessor, uses its own.
#[tracing::instrument(skip(antardasha, config), fields(years = antardasha.len()))]
pub fn pratyantardasha_timeline(
    birth_day: u8,
    antardasha: &[DashaPeriod],
    config: &DashaConfig,
) -> Vec<YearBlock> {
    let blocks: Vec<YearBlock> = antardasha
        .iter()
        .enumerate()
        .map(|(i, parent)| {
            let seed = match i {
                0 => parent.number,
                _ => antardasha[i - 1].number,
            };
            year_block(birth_day, parent, seed, config.max_periods_per_year)
        })
        .collect();
    tracing::debug!(
        blocks = blocks.len(),
        periods = blocks.iter().map(|b| b.periods.len()).sum::<usize>(),
        "pratyantardasha timeline generated"
    );
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_time::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn year(from: Date, number: Number) -> DashaPeriod {
        DashaPeriod {
            from,
            to: from + 364,
            number,
        }
    }

    #[test]
    fn carry_arithmetic() {
        // Seed 5, carry 10: 40 + 10 = 50 → 1 month (30 days), carry 20
        // 6: 48 + 20 = 68 → 2 months (60 days), carry 8
        // 7: 56 + 8 = 64 → 2 months (60 days), carry 4
        let parent = year(date(2021, 3, 10), 4);
        let block = year_block(10, &parent, 5, 50);
        let p = &block.periods;
        assert_eq!((p[0].from, p[0].to, p[0].number), (date(2021, 3, 10), date(2021, 4, 8), 5));
        assert_eq!((p[1].from, p[1].to, p[1].number), (date(2021, 4, 9), date(2021, 6, 7), 6));
        assert_eq!((p[2].from, p[2].to, p[2].number), (date(2021, 6, 8), date(2021, 8, 6), 7));
        assert_eq!(block.antardasha, 4);
        assert_eq!(block.year, 2021);
    }

    #[test]
    fn zero_month_periods_are_one_day() {
        // Seed 1, carry 5: 8 + 5 = 13 → 0 months → one day, carry 13
        // 2: 16 + 13 = 29 → 0 months → one day, carry 29
        // 3: 24 + 29 = 53 → 1 month, carry 23
        let start = date(2020, 1, 5);
        let parent = year(start, 7);
        let block = year_block(5, &parent, 1, 50);
        let p = &block.periods;
        assert_eq!((p[0].from, p[0].to, p[0].number), (start, start, 1));
        assert_eq!((p[1].from, p[1].to, p[1].number), (start + 1, start + 1, 2));
        assert_eq!((p[2].from, p[2].to, p[2].number), (start + 2, start + 31, 3));
        assert_eq!(p[0].duration_days(), 1);
    }

    #[test]
    fn last_period_is_clamped_to_year_end() {
        let parent = year(date(2022, 6, 1), 9);
        let block = year_block(1, &parent, 9, 50);
        let last = block.periods.last().unwrap();
        assert_eq!(last.to, parent.to);
        assert!(last.from <= last.to);
    }

    #[test]
    fn cap_truncates_block() {
        let parent = year(date(2022, 6, 1), 9);
        let block = year_block(1, &parent, 9, 2);
        assert_eq!(block.periods.len(), 2);
        assert!(block.periods[1].to < parent.to);
    }

    #[test]
    fn blocks_are_seeded_from_previous_year() {
        let a = year(date(2020, 5, 1), 3);
        let b = DashaPeriod {
            from: a.to + 1,
            to: a.to + 365,
            number: 8,
        };
        let blocks = pratyantardasha_timeline(1, &[a, b], &DashaConfig::default());
        assert_eq!(blocks[0].periods[0].number, 3);
        assert_eq!(blocks[1].periods[0].number, 3);
        assert_eq!(blocks[1].antardasha, 8);
    }
}
