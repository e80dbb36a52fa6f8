//! # nd-grid
//!
//! Lo Shu grid composition.
//!
//! Digits from the birth date, the root and destiny numbers, and the active
//! dasha periods are placed on the fixed 3×3 Lo Shu layout. Each digit keeps
//! a [`Source`] tag; a cell accumulates every digit placed into it, in order,
//! so colliding values from different sources stay individually visible.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Grid variants (natal, basic, destiny, and period views).
pub mod compose;

/// `LoShuGrid`, cells, and tagged digits.
pub mod grid;

/// Natal digit extraction.
pub mod natal;

/// The fixed value → cell layout.
pub mod position;

/// Provenance tags.
pub mod source;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use compose::{
    basic_digits, basic_grid, destiny_digits, destiny_grid, mahadasha_grid, monthly_grid,
    monthly_grids_for_year, natal_grid, personal_year_grid, yearly_grids, MONTHLY_REFERENCE_DAY,
    PERSONAL_YEAR_REFERENCE,
};
pub use grid::{ColoredDigit, GridCell, GridView, LoShuGrid};
pub use natal::natal_digits;
pub use position::{position_of, value_at, LO_SHU_POSITIONS};
pub use source::Source;
