//! Digit sums and digital-root reduction.
//!
//! Every number produced by the period generators and placed on a grid goes
//! through [`reduce`], which repeatedly sums decimal digits until a single
//! digit remains.

use crate::Number;

/// Sum the decimal digits of `n` once (`digit_sum(1998) == 27`).
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to a single digit by repeated digit summing.
///
/// `reduce(0) == 0`; for every `n >= 1` the result is the digital root in
/// `[1, 9]`, so multiples of 9 reduce to 9.
///
/// # Example
/// ```
/// use nd_core::reduce;
/// assert_eq!(reduce(46), 1);
/// assert_eq!(reduce(18), 9);
/// assert_eq!(reduce(7), 7);
/// ```
pub fn reduce(mut n: u64) -> Number {
    while n > 9 {
        n = digit_sum(n);
    }
    n as Number
}

/// Decimal digits of `n`, most significant first (`digits(0) == [0]`).
pub fn digits(n: u64) -> Vec<u8> {
    n.to_string().bytes().map(|b| b - b'0').collect()
}

/// The successor of `n` in the 1 → 2 → … → 9 → 1 cycle.
pub fn next_in_cycle(n: Number) -> Number {
    n % 9 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_stays_zero() {
        assert_eq!(reduce(0), 0);
    }

    #[test]
    fn single_digits_are_fixed_points() {
        for n in 1..=9u64 {
            assert_eq!(reduce(n), n as u8);
        }
    }

    #[test]
    fn multiples_of_nine() {
        assert_eq!(reduce(9), 9);
        assert_eq!(reduce(18), 9);
        assert_eq!(reduce(99), 9);
        assert_eq!(reduce(999_999_999), 9);
    }

    #[test]
    fn multi_pass_reduction() {
        // 99_999 → 45 → 9; 1_999 → 28 → 10 → 1
        assert_eq!(reduce(99_999), 9);
        assert_eq!(reduce(1_999), 1);
        assert_eq!(reduce(46), 1);
    }

    #[test]
    fn digit_sum_one_pass() {
        assert_eq!(digit_sum(1998), 27);
        assert_eq!(digit_sum(0), 0);
    }

    #[test]
    fn digit_list() {
        assert_eq!(digits(2000), vec![2, 0, 0, 0]);
        assert_eq!(digits(0), vec![0]);
    }

    #[test]
    fn cycle_wraps_after_nine() {
        assert_eq!(next_in_cycle(1), 2);
        assert_eq!(next_in_cycle(8), 9);
        assert_eq!(next_in_cycle(9), 1);
    }

    proptest! {
        #[test]
        fn reduce_lands_in_one_to_nine(n in 1u64..) {
            let r = reduce(n);
            prop_assert!((1..=9).contains(&r));
        }

        #[test]
        fn reduce_is_idempotent(n in 0u64..) {
            let r = reduce(n);
            prop_assert_eq!(reduce(r as u64), r);
        }

        #[test]
        fn reduce_matches_mod_nine(n in 1u64..) {
            let expected = if n % 9 == 0 { 9 } else { (n % 9) as u8 };
            prop_assert_eq!(reduce(n), expected);
        }
    }
}
