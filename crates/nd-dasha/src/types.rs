//! Core types for dasha timelines.
//!
//! Every level is built from the same interval shape ([`DashaPeriod`]),
//! except the Mahadasha, which is year-granular ([`MahadashaPeriod`]).

use nd_core::errors::Result;
use nd_core::Number;
use nd_time::Date;
use serde::{Deserialize, Serialize};

/// The period levels, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DashaLevel {
    /// Multi-year era.
    Mahadasha = 0,
    /// One birth-anniversary year.
    Antardasha = 1,
    /// Sub-period inside an Antardasha year.
    Pratyantardasha = 2,
}

impl DashaLevel {
    /// All levels, outermost first.
    pub const ALL: [DashaLevel; 3] = [
        DashaLevel::Mahadasha,
        DashaLevel::Antardasha,
        DashaLevel::Pratyantardasha,
    ];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }
}

/// The birth date every timeline is derived from.
///
/// Always a valid Gregorian date; serialized as `"D MMM YYYY"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthFacts {
    date: Date,
}

impl BirthFacts {
    /// Validate and build birth facts from day, month, and year.
    pub fn new(day: u8, month: u8, year: u16) -> Result<Self> {
        Ok(Self {
            date: Date::from_ymd(year, month, day)?,
        })
    }

    /// Wrap an existing date.
    pub fn from_date(date: Date) -> Self {
        Self { date }
    }

    /// The birth date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.date.day_of_month()
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.date.month()
    }

    /// Year.
    pub fn year(&self) -> u16 {
        self.date.year()
    }

    /// The birthday as it falls in `year` (29 February rolls to 1 March in
    /// common years).
    pub fn birthday_in(&self, year: u16) -> Result<Date> {
        self.date.anniversary_in(year)
    }
}

/// A numbered interval of civil days, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// First day of the period.
    pub from: Date,
    /// Last day of the period (inclusive).
    pub to: Date,
    /// The period's number (1–9).
    pub number: Number,
}

impl DashaPeriod {
    /// Whether `date` lies inside `[from, to]`.
    pub fn contains(&self, date: Date) -> bool {
        self.from <= date && date <= self.to
    }

    /// Length of the period in days, counting both ends.
    pub fn duration_days(&self) -> i32 {
        self.to - self.from + 1
    }
}

/// A Mahadasha era with explicit first and last calendar years.
///
/// The era lasts as many years as its own number, so
/// `to_year == from_year + number - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MahadashaPeriod {
    /// First calendar year of the era.
    pub from_year: u16,
    /// Last calendar year of the era (inclusive).
    pub to_year: u16,
    /// The era's number (1–9).
    pub number: Number,
}

impl MahadashaPeriod {
    /// Whether `year` lies inside `[from_year, to_year]`.
    pub fn contains_year(&self, year: u16) -> bool {
        self.from_year <= year && year <= self.to_year
    }

    /// Length of the era in years.
    pub fn duration_years(&self) -> u16 {
        self.to_year - self.from_year + 1
    }
}

/// The Pratyantardasha sub-periods of one Antardasha year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBlock {
    /// Calendar year in which the block starts (the birthday's year).
    pub year: u16,
    /// First day of the block (the birthday).
    pub from: Date,
    /// Last day of the block (the day before the next birthday).
    pub to: Date,
    /// Number of the Antardasha this block subdivides.
    pub antardasha: Number,
    /// Sub-periods in order.
    pub periods: Vec<DashaPeriod>,
}

impl YearBlock {
    /// Whether `date` lies inside `[from, to]`.
    pub fn contains(&self, date: Date) -> bool {
        self.from <= date && date <= self.to
    }
}

/// The periods active on one date, one slot per level.
///
/// A slot is `None` when the date falls outside the computed horizon of that
/// level, which callers display as an empty value rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashaSnapshot {
    /// The queried date.
    pub date: Date,
    /// Active Mahadasha.
    pub mahadasha: Option<MahadashaPeriod>,
    /// Active Antardasha.
    pub antardasha: Option<DashaPeriod>,
    /// Active Pratyantardasha.
    pub pratyantardasha: Option<DashaPeriod>,
}

impl DashaSnapshot {
    /// The number active at `level`, if any.
    pub fn number(&self, level: DashaLevel) -> Option<Number> {
        match level {
            DashaLevel::Mahadasha => self.mahadasha.map(|p| p.number),
            DashaLevel::Antardasha => self.antardasha.map(|p| p.number),
            DashaLevel::Pratyantardasha => self.pratyantardasha.map(|p| p.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dasha_levels_outermost_first() {
        assert!(DashaLevel::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(DashaLevel::Antardasha.name(), "Antardasha");
    }

    #[test]
    fn birth_facts_accessors() {
        let b = BirthFacts::new(15, 8, 1990).unwrap();
        assert_eq!((b.day(), b.month(), b.year()), (15, 8, 1990));
        assert!(BirthFacts::new(31, 4, 1990).is_err());
    }

    #[test]
    fn period_contains_both_ends() {
        let from = Date::from_ymd(2020, 1, 1).unwrap();
        let p = DashaPeriod {
            from,
            to: from + 29,
            number: 3,
        };
        assert!(p.contains(from));
        assert!(p.contains(from + 29));
        assert!(!p.contains(from + 30));
        assert!(!p.contains(from - 1));
        assert_eq!(p.duration_days(), 30);
    }

    #[test]
    fn mahadasha_years() {
        let m = MahadashaPeriod {
            from_year: 2005,
            to_year: 2010,
            number: 6,
        };
        assert_eq!(m.duration_years(), 6);
        assert!(m.contains_year(2010));
        assert!(!m.contains_year(2011));
    }
}
