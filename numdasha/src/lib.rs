//! # numdasha
//!
//! Numerological dasha timelines, daily and hourly numbers, and Lo Shu grid
//! composition.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates and adds [`Profile`], which bundles one
//! person's birth facts with their root and destiny numbers. Application
//! code should depend on this crate rather than the individual `nd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! numdasha = "0.1"
//! ```
//!
//! ```rust
//! use numdasha::dasha::{BirthFacts, DashaConfig};
//! use numdasha::time::Date;
//! use numdasha::Profile;
//!
//! let birth = BirthFacts::new(5, 1, 2000).unwrap();
//! let profile = Profile::new(birth, 5, 3, DashaConfig::default()).unwrap();
//!
//! let era = profile.timeline().mahadasha_for_year(2019).unwrap();
//! assert_eq!(era.number, 8);
//!
//! let today = Date::from_ymd(2024, 3, 10).unwrap();
//! assert_eq!(profile.hourly(today).unwrap().len(), 24);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Number aliases, digit reduction, errors, and settings.
pub use nd_core as core;

/// Calendar dates, months, weekdays, and the evaluation date.
pub use nd_time as time;

/// Mahadasha, Antardasha, Pratyantardasha, daily and hourly numbers.
pub use nd_dasha as dasha;

/// Lo Shu grid composition.
pub use nd_grid as grid;

/// Birth facts plus root and destiny numbers, with every derived view.
pub mod profile;

pub use profile::Profile;
