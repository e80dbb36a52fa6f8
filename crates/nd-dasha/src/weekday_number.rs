//! Weekday → number table.
//!
//! The mapping is a fixed convention, not an ordering: Tuesday is 9 and the
//! remaining days do not ascend. It is kept as a literal table.

use nd_core::Number;
use nd_time::Weekday;

/// The weekday numbers, Sunday first.
pub const WEEKDAY_NUMBERS: [(Weekday, Number); 7] = [
    (Weekday::Sunday, 1),
    (Weekday::Monday, 2),
    (Weekday::Tuesday, 9),
    (Weekday::Wednesday, 5),
    (Weekday::Thursday, 3),
    (Weekday::Friday, 6),
    (Weekday::Saturday, 8),
];

/// Number assigned to `weekday`.
pub fn weekday_number(weekday: Weekday) -> Number {
    // Sunday first: ordinals run Monday = 1 ..= Sunday = 7.
    WEEKDAY_NUMBERS[usize::from(weekday.ordinal() % 7)].1
}
