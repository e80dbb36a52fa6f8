//! The fixed value → cell layout.
//!
//! Cells are numbered 0–8 row by row from the top left. The classical Lo Shu
//! square reads
//!
//! ```text
//! 3 1 9
//! 6 7 5
//! 2 8 4
//! ```

use nd_core::Number;

/// `(value, cell)` pairs of the Lo Shu layout.
pub const LO_SHU_POSITIONS: [(Number, usize); 9] = [
    (3, 0),
    (1, 1),
    (9, 2),
    (6, 3),
    (7, 4),
    (5, 5),
    (2, 6),
    (8, 7),
    (4, 8),
];

/// Cell holding `value`, or `None` for values outside 1–9.
pub fn position_of(value: Number) -> Option<usize> {
    LO_SHU_POSITIONS
        .iter()
        .find(|&&(v, _)| v == value)
        .map(|&(_, cell)| cell)
}

/// Value that belongs in `cell`, or `None` for cells outside 0–8.
pub fn value_at(cell: usize) -> Option<Number> {
    LO_SHU_POSITIONS
        .iter()
        .find(|&&(_, c)| c == cell)
        .map(|&(v, _)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_the_lo_shu_square() {
        let cells: Vec<Number> = (0..9).map(|c| value_at(c).unwrap()).collect();
        assert_eq!(cells, vec![3, 1, 9, 6, 7, 5, 2, 8, 4]);
    }

    #[test]
    fn rows_columns_and_diagonals_sum_to_fifteen() {
        let v = |c: usize| u32::from(value_at(c).unwrap());
        let lines = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for line in lines {
            assert_eq!(line.iter().map(|&c| v(c)).sum::<u32>(), 15, "{line:?}");
        }
    }

    #[test]
    fn position_and_value_are_inverse() {
        for value in 1..=9 {
            assert_eq!(value_at(position_of(value).unwrap()), Some(value));
        }
        assert_eq!(position_of(0), None);
        assert_eq!(position_of(10), None);
        assert_eq!(value_at(9), None);
    }
}
