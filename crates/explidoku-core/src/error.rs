//! Validation failures for puzzle input and board mutation.

use crate::{Digit, Position};

/// A malformed or self-contradictory puzzle input, or a board mutation that
/// would break the peer-uniqueness invariant.
///
/// Every variant is raised before or instead of changing any state; a solve
/// that has produced at least one step never fails afterwards.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    /// The input did not have exactly 9 rows.
    #[display("expected 9 rows of values, got {rows}")]
    RowCount {
        /// Number of rows supplied.
        rows: usize,
    },
    /// An input row did not have exactly 9 values.
    #[display("expected 9 values in row {}, got {columns}", row + 1)]
    RowLength {
        /// 0-based index of the offending row.
        row: usize,
        /// Number of values in that row.
        columns: usize,
    },
    /// A cell value was outside the accepted 0-9 range.
    #[display("cell {cell} holds {value}, outside the accepted range 0-9")]
    ValueOutOfRange {
        /// The offending cell.
        cell: Position,
        /// The rejected value.
        value: u8,
    },
    /// Grid text contained a character that is not a digit, a blank marker
    /// (`.`, `_`, `0`), or whitespace.
    #[display("unexpected character {character:?} in grid text")]
    UnexpectedCharacter {
        /// The rejected character.
        character: char,
    },
    /// Grid text did not describe exactly 81 cells.
    #[display("grid text describes {cells} cells, expected 81")]
    CellCount {
        /// Number of cells found.
        cells: usize,
    },
    /// Two givens with the same digit share a row, column, or box.
    #[display("{digit} is given at both {first} and {second}, which share a unit")]
    ConflictingGiven {
        /// The duplicated digit.
        digit: Digit,
        /// The earlier of the two cells in scan order.
        first: Position,
        /// The later of the two cells in scan order.
        second: Position,
    },
    /// A placement targeted a cell that already holds a value.
    #[display("cell {cell} is already filled")]
    CellAlreadyFilled {
        /// The targeted cell.
        cell: Position,
    },
    /// A placement proposed a digit the cell no longer admits.
    #[display("{digit} is not a candidate of cell {cell}")]
    NotACandidate {
        /// The targeted cell.
        cell: Position,
        /// The rejected digit.
        digit: Digit,
    },
}
