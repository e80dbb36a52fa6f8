//! Provenance tags.

use nd_dasha::DashaLevel;
use serde::{Deserialize, Serialize};

/// Which computation contributed a digit to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// A non-zero digit of the birth date.
    Natal,
    /// The root number.
    Root,
    /// The destiny number.
    Destiny,
    /// The active Mahadasha number.
    Mahadasha,
    /// The active Antardasha number.
    Antardasha,
    /// The active Pratyantardasha number.
    Pratyantardasha,
}

impl Source {
    /// Stable lowercase label, used by renderers to pick colour and legend.
    pub const fn label(self) -> &'static str {
        match self {
            Source::Natal => "natal",
            Source::Root => "root",
            Source::Destiny => "destiny",
            Source::Mahadasha => "mahadasha",
            Source::Antardasha => "antardasha",
            Source::Pratyantardasha => "pratyantardasha",
        }
    }
}

impl From<DashaLevel> for Source {
    fn from(level: DashaLevel) -> Self {
        match level {
            DashaLevel::Mahadasha => Source::Mahadasha,
            DashaLevel::Antardasha => Source::Antardasha,
            DashaLevel::Pratyantardasha => Source::Pratyantardasha,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
