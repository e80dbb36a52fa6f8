//! # nd-dasha
//!
//! Numerological dasha timelines derived from a birth date and a root number.
//!
//! Three period levels cascade from the birth facts:
//! - Mahadasha: multi-year eras whose length equals their own number,
//!   starting at the root number and cycling 1 → 9.
//! - Antardasha: one period per birth-anniversary year.
//! - Pratyantardasha: roughly monthly sub-periods inside each Antardasha
//!   year, with day carry between consecutive sub-periods.
//!
//! Below those, the daily number is derived from the active Pratyantardasha
//! and the weekday, and the 24 hourly numbers from the daily number.
//!
//! All generators are pure: they take value inputs and return fresh vectors.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Antardasha (yearly) generator.
pub mod antardasha;

/// Generator configuration.
pub mod config;

/// Daily and hourly resolver.
pub mod daily;

/// Mahadasha (multi-year) generator and year lookup.
pub mod mahadasha;

/// Pratyantardasha (sub-yearly) generator.
pub mod pratyantardasha;

/// Active-period lookups and snapshots.
pub mod query;

/// All three levels computed together.
pub mod timeline;

/// Core data types shared by every level.
pub mod types;

/// Weekday → number table.
pub mod weekday_number;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use antardasha::{antardasha_number, antardasha_period, antardasha_timeline};
pub use config::{DashaConfig, DEFAULT_YEARS_TO_CALCULATE, MAX_PERIODS_PER_YEAR};
pub use daily::{
    daily_for_date, daily_value, hourly_for_daily, hourly_for_date, DailyResult, HourlyResult,
};
pub use mahadasha::{mahadasha_for_date, mahadasha_for_year, mahadasha_timeline};
pub use pratyantardasha::{pratyantardasha_timeline, year_block};
pub use query::{antardasha_for_date, pratyantardasha_for_date, snapshot};
pub use timeline::DashaTimeline;
pub use types::{BirthFacts, DashaLevel, DashaPeriod, DashaSnapshot, MahadashaPeriod, YearBlock};
pub use weekday_number::{weekday_number, WEEKDAY_NUMBERS};
