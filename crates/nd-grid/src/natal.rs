//! Natal digit extraction.

use nd_core::digits;
use nd_dasha::BirthFacts;

use crate::grid::ColoredDigit;
use crate::source::Source;

/// Non-zero digits of the birth date, tagged [`Source::Natal`].
///
/// The decimal digits of day, month, and year are taken in that order with no
/// padding (5 Jan 2000 reads 5, 1, 2, 0, 0, 0); zeros are dropped and
/// repeated digits are all kept.
pub fn natal_digits(birth: &BirthFacts) -> Vec<ColoredDigit> {
    [
        u64::from(birth.day()),
        u64::from(birth.month()),
        u64::from(birth.year()),
    ]
    .into_iter()
    .flat_map(digits)
    .filter(|&d| d != 0)
    .map(|d| ColoredDigit::new(d, Source::Natal))
    .collect()
}
