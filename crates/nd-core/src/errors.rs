//! Error types for numdasha.
//!
//! The period generators and grid composers are total over valid inputs, so
//! errors only arise at the edges: building dates, parsing boundary strings,
//! and checking caller-supplied base numbers. All of them funnel into a
//! single `thiserror`-derived enum with the `ensure!` convenience macro
//! defined here.

use thiserror::Error;

/// The top-level error type used throughout numdasha.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (impossible calendar date, arithmetic out of range).
    #[error("date error: {0}")]
    Date(String),

    /// A boundary string could not be parsed.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl Error {
    /// Build an [`Error::Parse`] from anything string-like.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Shorthand `Result` type used throughout numdasha.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use nd_core::ensure;
/// fn single_digit(n: u8) -> nd_core::errors::Result<u8> {
///     ensure!((1..=9).contains(&n), "expected 1..=9, got {n}");
///     Ok(n)
/// }
/// assert!(single_digit(7).is_ok());
/// assert!(single_digit(12).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let e = Error::parse("31 Foo 2000", "unknown month");
        assert_eq!(e.to_string(), "cannot parse \"31 Foo 2000\": unknown month");
    }

    #[test]
    fn ensure_macro() {
        fn check(n: u8) -> Result<u8> {
            ensure!(n > 0, "n must be positive");
            Ok(n)
        }
        assert_eq!(check(3), Ok(3));
        assert_eq!(
            check(0),
            Err(Error::Precondition("n must be positive".into()))
        );
    }
}
