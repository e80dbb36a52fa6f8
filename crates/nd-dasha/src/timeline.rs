//! All three period levels computed together.
//!
//! [`DashaTimeline`] runs the generators once for a birth date and root
//! number and answers date lookups against the stored result. It is a plain
//! value: recomputing with other inputs produces a new timeline.

use nd_core::RootNumber;
use nd_time::Date;
use serde::{Deserialize, Serialize};

use crate::antardasha::antardasha_timeline;
use crate::config::DashaConfig;
use crate::daily::{daily_for_date, hourly_for_date, DailyResult, HourlyResult};
use crate::mahadasha::{mahadasha_for_year, mahadasha_timeline};
use crate::pratyantardasha::pratyantardasha_timeline;
use crate::query::{antardasha_for_date, pratyantardasha_for_date, snapshot};
use crate::types::{BirthFacts, DashaPeriod, DashaSnapshot, MahadashaPeriod, YearBlock};

/// Mahadasha, Antardasha, and Pratyantardasha timelines for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashaTimeline {
    /// Birth facts the timeline was computed from.
    pub birth: BirthFacts,
    /// Root number seeding the Mahadasha.
    pub root_number: RootNumber,
    /// Generator settings used.
    pub config: DashaConfig,
    /// Mahadasha eras.
    pub mahadasha: Vec<MahadashaPeriod>,
    /// Antardasha years.
    pub antardasha: Vec<DashaPeriod>,
    /// Pratyantardasha blocks, one per Antardasha year.
    pub pratyantardasha: Vec<YearBlock>,
}

impl DashaTimeline {
    /// Run every generator.
    pub fn compute(birth: BirthFacts, root_number: RootNumber, config: DashaConfig) -> Self {
        let mahadasha = mahadasha_timeline(birth.year(), root_number, config.years_to_calculate);
        let antardasha = antardasha_timeline(&birth, config.years_to_calculate);
        let pratyantardasha = pratyantardasha_timeline(birth.day(), &antardasha, &config);
        Self {
            birth,
            root_number,
            config,
            mahadasha,
            antardasha,
            pratyantardasha,
        }
    }

    /// Mahadasha in force during `year`.
    pub fn mahadasha_for_year(&self, year: u16) -> Option<&MahadashaPeriod> {
        mahadasha_for_year(&self.mahadasha, year)
    }

    /// Antardasha containing `date`.
    pub fn antardasha_for_date(&self, date: Date) -> Option<&DashaPeriod> {
        antardasha_for_date(&self.antardasha, date)
    }

    /// Pratyantardasha containing `date`.
    pub fn pratyantardasha_for_date(&self, date: Date) -> Option<&DashaPeriod> {
        pratyantardasha_for_date(&self.pratyantardasha, date)
    }

    /// Active periods of every level on `date`.
    pub fn snapshot(&self, date: Date) -> DashaSnapshot {
        snapshot(
            &self.mahadasha,
            &self.antardasha,
            &self.pratyantardasha,
            date,
        )
    }

    /// Daily reading for `date`.
    pub fn daily(&self, date: Date) -> Option<DailyResult> {
        daily_for_date(&self.pratyantardasha, date)
    }

    /// Hourly readings for `date`.
    pub fn hourly(&self, date: Date) -> Option<Vec<HourlyResult>> {
        hourly_for_date(&self.pratyantardasha, date)
    }
}
