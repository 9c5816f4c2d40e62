//! Core board model for the explidoku solving engine.
//!
//! This crate provides the data types the technique engine deduces over:
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`digit_set`]: the 9-bit candidate set for a single cell
//! - [`position`]: `(row, column)` cell coordinates and their peer table
//! - [`unit`]: the 27 peer groups (rows, columns, boxes)
//! - [`grid`]: the plain 9x9 value grid used for input and snapshots
//! - [`board`]: the candidate-tracking board with invariant-preserving
//!   mutation
//! - [`error`]: the validation failure taxonomy
//!
//! # Examples
//!
//! ```
//! use explidoku_core::{Board, Digit, Grid, Position};
//!
//! let grid = Grid::from_values(&[
//!     [0, 0, 0, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 4, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 0, 0],
//! ])?;
//!
//! let board = Board::from_grid(&grid)?;
//! assert!(!board.candidates(Position::new(4, 8)).contains(Digit::D4));
//! # Ok::<(), explidoku_core::ValidationError>(())
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod error;
pub mod grid;
pub mod position;
pub mod unit;

pub use self::{
    board::Board, digit::Digit, digit_set::DigitSet, error::ValidationError, grid::Grid,
    position::Position, unit::Unit,
};
