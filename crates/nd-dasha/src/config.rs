//! Generator configuration.

use serde::{Deserialize, Serialize};

/// Default horizon: Mahadasha and Antardasha run to `birth_year + 100`.
pub const DEFAULT_YEARS_TO_CALCULATE: u16 = 100;

/// Hard cap on Pratyantardasha sub-periods per Antardasha year.
pub const MAX_PERIODS_PER_YEAR: usize = 50;

/// Knobs shared by the timeline generators.
///
/// ```
/// use nd_dasha::DashaConfig;
/// let cfg = DashaConfig::default().with_years_to_calculate(20);
/// assert_eq!(cfg.years_to_calculate, 20);
/// assert_eq!(cfg.max_periods_per_year, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashaConfig {
    /// Number of years after the birth year that the timelines cover.
    pub years_to_calculate: u16,
    /// Safety cap on sub-periods generated inside one Antardasha year.
    pub max_periods_per_year: usize,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            years_to_calculate: DEFAULT_YEARS_TO_CALCULATE,
            max_periods_per_year: MAX_PERIODS_PER_YEAR,
        }
    }
}

impl DashaConfig {
    /// Set the horizon in years.
    pub fn with_years_to_calculate(mut self, years: u16) -> Self {
        self.years_to_calculate = years;
        self
    }

    /// Set the per-year sub-period cap.
    pub fn with_max_periods_per_year(mut self, cap: usize) -> Self {
        self.max_periods_per_year = cap;
        self
    }
}
