//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**, the "today" used when a
//! current-period grid or daily reading is requested without an explicit
//! date. It is a process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! The date is stored as a serial day number so that this crate stays free of
//! any calendar type; `nd-time` converts it back to a `Date`. Every core
//! computation takes its reference date as an argument, so the setting is only
//! consulted by the `*_today` convenience wrappers.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Process-wide settings used by the numdasha library.
pub struct Settings {
    /// The current evaluation date (serial day number), if pinned.
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<i32>> {
        // The slot holds a plain `Option<i32>`; a panic while it was held
        // cannot leave it half-written.
        self.evaluation_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the pinned evaluation date serial number, or `None` when the
    /// wall clock should be used.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self.slot()
    }

    /// Pin the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self.slot() = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self.slot() = None;
    }
}

/// RAII guard that pins the evaluation date and restores the previous value
/// when dropped.
///
/// ```
/// use nd_core::{ScopedEvaluationDate, Settings};
/// {
///     let _guard = ScopedEvaluationDate::new(730_000);
///     assert_eq!(Settings::instance().evaluation_date_serial(), Some(730_000));
/// }
/// ```
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Pin the evaluation date to `serial` until the guard is dropped.
    pub fn new(serial: i32) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_date_restores_previous_value() {
        let settings = Settings::instance();
        let before = settings.evaluation_date_serial();
        {
            let _outer = ScopedEvaluationDate::new(1_000);
            assert_eq!(settings.evaluation_date_serial(), Some(1_000));
            {
                let _inner = ScopedEvaluationDate::new(2_000);
                assert_eq!(settings.evaluation_date_serial(), Some(2_000));
            }
            assert_eq!(settings.evaluation_date_serial(), Some(1_000));
        }
        assert_eq!(settings.evaluation_date_serial(), before);
    }
}
