//! # nd-time
//!
//! Civil date, month, and weekday types, plus the `"D MMM YYYY"` boundary
//! format used when dates leave the library.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Boundary formatting and parsing (`"5 Jan 1998"`, ISO dates, hour labels).
pub mod format;

/// Month of the year.
pub mod month;

/// The evaluation date ("today").
pub mod today;

/// Day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use format::{format_date, format_hour_label, parse_date, parse_iso_date};
pub use month::{Month, ALL_MONTHS};
pub use today::{evaluation_date, pin_evaluation_date};
pub use weekday::Weekday;
