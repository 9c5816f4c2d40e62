//! The 9x9 value grid: boundary input and display snapshot.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, Position, ValidationError};

/// A 9x9 grid of values with empty cells, without candidate bookkeeping.
///
/// `Grid` is the boundary type of the engine: callers hand one in to start a
/// solve, and every step snapshot hands one back out. It performs the shape
/// and range validation of raw input; the peer-uniqueness check happens
/// when a [`Board`](crate::Board) is built from it.
///
/// # Examples
///
/// Building from rows of integers (0 = empty):
///
/// ```
/// use explidoku_core::{Digit, Grid, Position};
///
/// let grid = Grid::from_values(&[
///     [5, 3, 0, 0, 7, 0, 0, 0, 0],
///     [6, 0, 0, 1, 9, 5, 0, 0, 0],
///     [0, 9, 8, 0, 0, 0, 0, 6, 0],
///     [8, 0, 0, 0, 6, 0, 0, 0, 3],
///     [4, 0, 0, 8, 0, 3, 0, 0, 1],
///     [7, 0, 0, 0, 2, 0, 0, 0, 6],
///     [0, 6, 0, 0, 0, 0, 2, 8, 0],
///     [0, 0, 0, 4, 1, 9, 0, 0, 5],
///     [0, 0, 0, 0, 8, 0, 0, 7, 9],
/// ])?;
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 2)), None);
/// # Ok::<(), explidoku_core::ValidationError>(())
/// ```
///
/// Parsing grid text (whitespace is ignored; `.`, `_`, and `0` mark empty
/// cells):
///
/// ```
/// use explidoku_core::Grid;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
/// assert_eq!(grid.filled_count(), 30);
/// # Ok::<(), explidoku_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Builds a grid from 9 rows of 9 values each, where 0 marks an empty
    /// cell and 1-9 are givens.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RowCount`], [`ValidationError::RowLength`],
    /// or [`ValidationError::ValueOutOfRange`] when the input is not a 9x9
    /// arrangement of values 0-9.
    pub fn from_values<R>(rows: &[R]) -> Result<Self, ValidationError>
    where
        R: AsRef<[u8]>,
    {
        if rows.len() != 9 {
            return Err(ValidationError::RowCount { rows: rows.len() });
        }
        let mut grid = Self::new();
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != 9 {
                return Err(ValidationError::RowLength {
                    row,
                    columns: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                #[expect(clippy::cast_possible_truncation)]
                let cell = Position::new(row as u8, col as u8);
                if value == 0 {
                    continue;
                }
                let digit = Digit::try_from_value(value)
                    .ok_or(ValidationError::ValueOutOfRange { cell, value })?;
                grid.set(cell, Some(digit));
            }
        }
        Ok(grid)
    }

    /// Returns the value at a position, or `None` for an empty cell.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the value at a position.
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell holds a value.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.filled_count() == 81
    }

    /// Iterates over all cells in row-major order with their positions.
    pub fn cells(self) -> impl Iterator<Item = (Position, Option<Digit>)> {
        Position::ALL
            .into_iter()
            .map(move |pos| (pos, self.cells[pos.index()]))
    }
}

impl FromStr for Grid {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut index = 0usize;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let value = match character {
                '.' | '_' | '0' => None,
                #[expect(clippy::cast_possible_truncation)]
                '1'..='9' => Digit::try_from_value(character as u8 - b'0'),
                _ => return Err(ValidationError::UnexpectedCharacter { character }),
            };
            if index >= 81 {
                // Keep counting so the error reports the full size.
                index += 1;
                continue;
            }
            grid.cells[index] = value;
            index += 1;
        }
        if index != 81 {
            return Err(ValidationError::CellCount { cells: index });
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..9 {
                if col == 3 || col == 6 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}
