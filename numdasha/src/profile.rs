//! One person's numbers.
//!
//! A [`Profile`] checks the caller-supplied root and destiny numbers once,
//! computes the dasha timelines, and then answers every timeline, daily,
//! hourly, and grid question from the stored result. The `*_today` methods
//! read [`nd_time::evaluation_date`], so tests pin "today" with
//! [`nd_time::pin_evaluation_date`].
//!
//! Only the inputs are serialized. Deserializing goes through
//! [`Profile::new`], so the checks are repeated and the timelines are
//! recomputed.

use nd_core::errors::{Error, Result};
use nd_core::{ensure, DestinyNumber, RootNumber};
use nd_dasha::{BirthFacts, DailyResult, DashaConfig, DashaSnapshot, DashaTimeline, HourlyResult};
use nd_grid::{
    basic_grid, destiny_grid, mahadasha_grid, monthly_grid, monthly_grids_for_year, natal_grid,
    personal_year_grid, yearly_grids, LoShuGrid,
};
use nd_time::{evaluation_date, Date};
use serde::{Deserialize, Serialize};

/// Birth facts, root and destiny numbers, and the timelines computed from
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProfileInputs", into = "ProfileInputs")]
pub struct Profile {
    destiny_number: DestinyNumber,
    timeline: DashaTimeline,
}

/// Serialized form of a [`Profile`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ProfileInputs {
    birth: BirthFacts,
    root_number: RootNumber,
    destiny_number: DestinyNumber,
    config: DashaConfig,
}

impl TryFrom<ProfileInputs> for Profile {
    type Error = Error;

    fn try_from(inputs: ProfileInputs) -> Result<Self> {
        Profile::new(
            inputs.birth,
            inputs.root_number,
            inputs.destiny_number,
            inputs.config,
        )
    }
}

impl From<Profile> for ProfileInputs {
    fn from(profile: Profile) -> Self {
        Self {
            birth: profile.timeline.birth,
            root_number: profile.timeline.root_number,
            destiny_number: profile.destiny_number,
            config: profile.timeline.config,
        }
    }
}

impl Profile {
    /// Validate the base numbers and compute every timeline.
    ///
    /// # Errors
    /// `Error::Precondition` when `root` or `destiny` is outside 1–9.
    #[tracing::instrument(skip(birth, config), fields(birth = %birth.date()))]
    pub fn new(
        birth: BirthFacts,
        root: RootNumber,
        destiny: DestinyNumber,
        config: DashaConfig,
    ) -> Result<Self> {
        ensure!((1..=9).contains(&root), "root number must be 1..=9, got {root}");
        ensure!(
            (1..=9).contains(&destiny),
            "destiny number must be 1..=9, got {destiny}"
        );
        let timeline = DashaTimeline::compute(birth, root, config);
        tracing::debug!(
            mahadasha = timeline.mahadasha.len(),
            antardasha = timeline.antardasha.len(),
            "profile computed"
        );
        Ok(Self {
            destiny_number: destiny,
            timeline,
        })
    }

    /// Birth facts.
    pub fn birth(&self) -> &BirthFacts {
        &self.timeline.birth
    }

    /// Root number.
    pub fn root_number(&self) -> RootNumber {
        self.timeline.root_number
    }

    /// Destiny number.
    pub fn destiny_number(&self) -> DestinyNumber {
        self.destiny_number
    }

    /// The computed timelines.
    pub fn timeline(&self) -> &DashaTimeline {
        &self.timeline
    }

    /// Active periods on `date`.
    pub fn snapshot(&self, date: Date) -> DashaSnapshot {
        self.timeline.snapshot(date)
    }

    /// Daily reading for `date`, `None` outside the computed horizon.
    pub fn daily(&self, date: Date) -> Option<DailyResult> {
        self.timeline.daily(date)
    }

    /// The 24 hourly numbers of `date`, `None` outside the computed horizon.
    pub fn hourly(&self, date: Date) -> Option<Vec<HourlyResult>> {
        self.timeline.hourly(date)
    }

    /// Natal grid.
    pub fn natal_grid(&self) -> LoShuGrid {
        natal_grid(self.birth())
    }

    /// Natal grid plus the root number.
    pub fn basic_grid(&self) -> LoShuGrid {
        basic_grid(self.birth(), self.root_number())
    }

    /// Basic grid plus the destiny number.
    pub fn destiny_grid(&self) -> LoShuGrid {
        destiny_grid(self.birth(), self.root_number(), self.destiny_number)
    }

    /// Destiny grid plus the Mahadasha active on `date`.
    pub fn mahadasha_grid(&self, date: Date) -> LoShuGrid {
        mahadasha_grid(&self.timeline, self.destiny_number, date)
    }

    /// Personal-year grid of `year`.
    pub fn personal_year_grid(&self, year: u16) -> Result<LoShuGrid> {
        personal_year_grid(&self.timeline, self.destiny_number, year)
    }

    /// Monthly grid of `month` in `year`.
    pub fn monthly_grid(&self, year: u16, month: u8) -> Result<LoShuGrid> {
        monthly_grid(&self.timeline, self.destiny_number, year, month)
    }

    /// Personal-year grids for `from_year ..= to_year`.
    pub fn yearly_grids(&self, from_year: u16, to_year: u16) -> Result<Vec<LoShuGrid>> {
        yearly_grids(&self.timeline, self.destiny_number, from_year, to_year)
    }

    /// The twelve monthly grids of `year`.
    pub fn monthly_grids_for_year(&self, year: u16) -> Result<Vec<LoShuGrid>> {
        monthly_grids_for_year(&self.timeline, self.destiny_number, year)
    }

    /// Active periods on the evaluation date.
    pub fn snapshot_today(&self) -> Result<DashaSnapshot> {
        Ok(self.snapshot(evaluation_date()?))
    }

    /// Daily reading for the evaluation date.
    pub fn daily_today(&self) -> Result<Option<DailyResult>> {
        Ok(self.daily(evaluation_date()?))
    }

    /// Hourly numbers for the evaluation date.
    pub fn hourly_today(&self) -> Result<Option<Vec<HourlyResult>>> {
        Ok(self.hourly(evaluation_date()?))
    }

    /// Mahadasha grid for the evaluation date.
    pub fn mahadasha_grid_today(&self) -> Result<LoShuGrid> {
        Ok(self.mahadasha_grid(evaluation_date()?))
    }

    /// Personal-year grid for the year of the evaluation date.
    pub fn personal_year_grid_today(&self) -> Result<LoShuGrid> {
        self.personal_year_grid(evaluation_date()?.year())
    }

    /// Monthly grid for the month of the evaluation date.
    pub fn monthly_grid_today(&self) -> Result<LoShuGrid> {
        let today = evaluation_date()?;
        self.monthly_grid(today.year(), today.month())
    }
}
