//! `LoShuGrid`, cells, and tagged digits.

use nd_core::Number;
use nd_time::Date;
use serde::{Deserialize, Serialize};

use crate::position::position_of;
use crate::source::Source;

/// Number of cells in a Lo Shu grid.
pub const CELL_COUNT: usize = 9;

/// A digit together with the computation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColoredDigit {
    /// The digit (1–9).
    pub value: Number,
    /// Where it came from.
    pub source: Source,
}

impl ColoredDigit {
    /// Tag `value` with `source`.
    pub fn new(value: Number, source: Source) -> Self {
        Self { value, source }
    }
}

/// One of the nine cells, holding every digit placed into it in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Cell index, 0–8, row by row from the top left.
    pub position: u8,
    /// Digits placed here.
    pub digits: Vec<ColoredDigit>,
}

impl GridCell {
    /// Whether nothing was placed here.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

/// Which view a grid was composed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridView {
    /// Birth-date digits only.
    Natal,
    /// Natal digits plus the root number.
    Basic,
    /// Basic digits plus the destiny number.
    Destiny,
    /// Destiny digits plus the Mahadasha active on `date`.
    Mahadasha {
        /// Reference date.
        date: Date,
    },
    /// Destiny digits plus the Mahadasha and Antardasha of `year`.
    PersonalYear {
        /// Target year.
        year: u16,
    },
    /// Destiny digits plus the Mahadasha, Antardasha, and Pratyantardasha of
    /// `month` in `year`.
    Monthly {
        /// Target year.
        year: u16,
        /// Target month (1–12).
        month: u8,
    },
}

/// A 3×3 Lo Shu grid of tagged digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoShuGrid {
    /// The view this grid was composed for.
    pub view: GridView,
    cells: [GridCell; CELL_COUNT],
}

impl LoShuGrid {
    /// A grid with nine empty cells.
    pub fn empty(view: GridView) -> Self {
        Self {
            view,
            cells: std::array::from_fn(|position| GridCell {
                position: position as u8,
                digits: Vec::new(),
            }),
        }
    }

    /// An empty grid with `digits` placed in order.
    pub fn from_digits(view: GridView, digits: &[ColoredDigit]) -> Self {
        let mut grid = Self::empty(view);
        grid.place_all(digits);
        grid
    }

    /// Append `digit` to the cell of its value. Digits outside 1–9 have no
    /// cell and are skipped.
    pub fn place(&mut self, digit: ColoredDigit) {
        match position_of(digit.value) {
            Some(position) => self.cells[position].digits.push(digit),
            None => tracing::debug!(value = digit.value, "digit has no lo shu cell"),
        }
    }

    /// Place every digit of `digits` in order.
    pub fn place_all(&mut self, digits: &[ColoredDigit]) {
        for &digit in digits {
            self.place(digit);
        }
    }

    /// All nine cells, row by row.
    pub fn cells(&self) -> &[GridCell; CELL_COUNT] {
        &self.cells
    }

    /// The cell at `position` (0–8).
    pub fn cell(&self, position: usize) -> Option<&GridCell> {
        self.cells.get(position)
    }

    /// The cell that holds `value`.
    pub fn cell_for_value(&self, value: Number) -> Option<&GridCell> {
        position_of(value).map(|position| &self.cells[position])
    }

    /// The grid as three rows of three cells.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(3)
    }

    /// How many digits of `value` were placed.
    pub fn count(&self, value: Number) -> usize {
        self.cell_for_value(value).map_or(0, |cell| cell.digits.len())
    }

    /// Values 1–9 whose cell is empty, ascending.
    pub fn missing_values(&self) -> Vec<Number> {
        (1..=9).filter(|&v| self.count(v) == 0).collect()
    }

    /// Every digit placed from `source`, in cell order.
    pub fn digits_from(&self, source: Source) -> Vec<ColoredDigit> {
        self.cells
            .iter()
            .flat_map(|cell| cell.digits.iter().copied())
            .filter(|digit| digit.source == source)
            .collect()
    }

    /// Total number of digits on the grid.
    pub fn len(&self) -> usize {
        self.cells.iter().map(|cell| cell.digits.len()).sum()
    }

    /// Whether no digit was placed.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(GridCell::is_empty)
    }
}
