//! The 27 peer groups of the board: rows, columns, and boxes.

use std::fmt::{self, Display};

use crate::Position;

/// A sudoku unit: one of the 27 groups in which each digit 1-9 must appear
/// exactly once.
///
/// [`Unit::ALL`] lists rows first, then columns, then boxes; techniques that
/// scan "every unit" do so in that order, which fixes their tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A row, identified by its 0-based index.
    Row(u8),
    /// A column, identified by its 0-based index.
    Column(u8),
    /// A 3x3 box, identified by its 0-based index (left to right, top to
    /// bottom).
    Box(u8),
}

impl Unit {
    /// All 27 units: rows 0-8, then columns 0-8, then boxes 0-8.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row(0); 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row(i as u8);
            all[i + 9] = Self::Column(i as u8);
            all[i + 18] = Self::Box(i as u8);
            i += 1;
        }
        all
    };

    /// Returns the nine cells of this unit in reading order.
    ///
    /// # Panics
    ///
    /// Panics if the unit's index is not in the range 0-8.
    #[must_use]
    pub const fn cells(self) -> [Position; 9] {
        let mut cells = [Position::new(0, 0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            let k = i as u8;
            cells[i] = match self {
                Self::Row(row) => Position::new(row, k),
                Self::Column(col) => Position::new(k, col),
                Self::Box(index) => {
                    Position::new((index / 3) * 3 + k / 3, (index % 3) * 3 + k % 3)
                }
            };
            i += 1;
        }
        cells
    }

    /// Returns `true` if the position lies in this unit.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            Self::Row(row) => pos.row() == row,
            Self::Column(col) => pos.col() == col,
            Self::Box(index) => pos.box_index() == index,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(row) => write!(f, "row {}", row + 1),
            Self::Column(col) => write!(f, "column {}", col + 1),
            Self::Box(index) => write!(f, "box {}", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ordering() {
        assert_eq!(Unit::ALL[0], Unit::Row(0));
        assert_eq!(Unit::ALL[8], Unit::Row(8));
        assert_eq!(Unit::ALL[9], Unit::Column(0));
        assert_eq!(Unit::ALL[18], Unit::Box(0));
        assert_eq!(Unit::ALL[26], Unit::Box(8));
    }

    #[test]
    fn test_cells_belong_to_unit() {
        for unit in Unit::ALL {
            for cell in unit.cells() {
                assert!(unit.contains(cell), "{unit} should contain {cell}");
            }
        }
    }

    #[test]
    fn test_box_cells() {
        let cells = Unit::Box(4).cells();
        assert_eq!(cells[0], Position::new(3, 3));
        assert_eq!(cells[4], Position::new(4, 4));
        assert_eq!(cells[8], Position::new(5, 5));
    }

    #[test]
    fn test_each_cell_is_in_three_units() {
        for cell in Position::ALL {
            let count = Unit::ALL.iter().filter(|u| u.contains(cell)).count();
            assert_eq!(count, 3);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Unit::Row(0).to_string(), "row 1");
        assert_eq!(Unit::Column(4).to_string(), "column 5");
        assert_eq!(Unit::Box(8).to_string(), "box 9");
    }
}
