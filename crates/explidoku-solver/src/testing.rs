//! Test utilities for technique implementations.
//!
//! [`TechniqueTester`] wraps a board and offers fluent, panicking
//! assertions about what a technique's scan finds, so technique tests read
//! as a short script: build a position, scan, assert the finding.
//!
//! # Example
//!
//! ```
//! use explidoku_core::{Digit, Position};
//! use explidoku_solver::{technique::NakedSingle, testing::TechniqueTester};
//!
//! TechniqueTester::from_str(
//!     "
//!     123 456 78_
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//! ",
//! )
//! .assert_places(&NakedSingle::new(), Position::new(0, 8), Digit::D9);
//! ```

use explidoku_core::{Board, Digit, Grid, Position};

use crate::{Action, Finding, solver::apply_finding, technique::Technique};

/// A fluent assertion harness for technique scans.
///
/// All assertion methods return `self` for chaining and panic with a
/// detailed message on failure, reporting the caller's source location.
#[derive(Debug)]
pub struct TechniqueTester {
    board: Board,
}

impl TechniqueTester {
    /// Creates a tester over an existing board.
    #[must_use]
    pub const fn new(board: Board) -> Self {
        Self { board }
    }

    /// Creates a tester from grid text (the [`Grid`] string format).
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid, conflict-free grid.
    #[track_caller]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        let grid: Grid = s.parse().expect("invalid grid text");
        Self::new(Board::from_grid(&grid).expect("conflicting givens"))
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Asserts that the technique finds a placement of `digit` at `cell`.
    #[track_caller]
    pub fn assert_places<T>(self, technique: &T, cell: Position, digit: Digit) -> Self
    where
        T: Technique,
    {
        let finding = self.expect_finding(technique);
        match finding.action {
            Action::Place {
                cell: found_cell,
                digit: found_digit,
            } => {
                assert_eq!(
                    (found_cell, found_digit),
                    (cell, digit),
                    "expected placement of {digit} at {cell}, found {found_digit} at {found_cell}"
                );
            }
            Action::Eliminate { .. } => {
                panic!("expected a placement at {cell}, found eliminations: {finding:?}")
            }
        }
        self
    }

    /// Asserts that the technique finds eliminations including every
    /// `(cell, digit)` pair in `expected`.
    #[track_caller]
    pub fn assert_eliminates<T>(self, technique: &T, expected: &[(Position, Digit)]) -> Self
    where
        T: Technique,
    {
        let finding = self.expect_finding(technique);
        let Action::Eliminate { removals } = &finding.action else {
            panic!("expected eliminations, found {finding:?}");
        };
        for &(cell, digit) in expected {
            assert!(
                removals.iter().any(|r| r.cell == cell && r.digit == digit),
                "expected elimination of {digit} at {cell}, found {removals:?}"
            );
        }
        self
    }

    /// Asserts that the technique's explanation mentions `needle`.
    #[track_caller]
    pub fn assert_explains<T>(self, technique: &T, needle: &str) -> Self
    where
        T: Technique,
    {
        let finding = self.expect_finding(technique);
        assert!(
            finding.explanation.contains(needle),
            "explanation {:?} does not mention {needle:?}",
            finding.explanation
        );
        self
    }

    /// Asserts that the technique finds nothing on the current board.
    #[track_caller]
    pub fn assert_no_finding<T>(self, technique: &T) -> Self
    where
        T: Technique,
    {
        if let Some(finding) = technique.scan(&self.board) {
            panic!("expected no finding, got {finding:?}");
        }
        self
    }

    /// Scans and applies the technique's finding once.
    ///
    /// # Panics
    ///
    /// Panics if the technique finds nothing or the finding is invalid.
    #[track_caller]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        let finding = self.expect_finding(technique);
        apply_finding(&mut self.board, &finding).expect("finding must apply cleanly");
        self
    }

    /// Asserts the exact candidate set of a cell.
    #[track_caller]
    pub fn assert_candidates<I>(self, cell: Position, digits: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let expected: explidoku_core::DigitSet = digits.into_iter().collect();
        let actual = self.board.candidates(cell);
        assert_eq!(
            actual, expected,
            "candidates of {cell}: expected {expected:?}, got {actual:?}"
        );
        self
    }

    #[track_caller]
    fn expect_finding<T>(&self, technique: &T) -> Finding
    where
        T: Technique,
    {
        technique
            .scan(&self.board)
            .unwrap_or_else(|| panic!("{} found nothing", technique.id()))
    }
}
