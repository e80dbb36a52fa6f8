//! # nd-core
//!
//! Core types, digit arithmetic, and error definitions for numdasha.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – the numerology number aliases, digital-root
//! reduction, the error hierarchy, and the process-wide `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Digit sums and digital-root reduction.
pub mod digits;

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A reduced numerology number (1–9; 0 only for the reduction of 0).
pub type Number = u8;

/// A root (psychic) number in `[1, 9]`, computed outside this library.
pub type RootNumber = Number;

/// A destiny (life-path) number in `[1, 9]`, computed outside this library.
pub type DestinyNumber = Number;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use digits::{digit_sum, digits, next_in_cycle, reduce};
pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
