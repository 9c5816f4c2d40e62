use explidoku_core::{Board, Position};
use tinyvec::tiny_vec;

use crate::{
    Action, Finding, TechniqueId,
    technique::Technique,
};

/// A technique that finds cells with exactly one remaining candidate.
///
/// When only one digit is still possible in a cell, that digit must go
/// there. Cells are scanned in row-major order, so ties break toward the
/// lowest row, then the lowest column.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for NakedSingle {
    fn id(&self) -> TechniqueId {
        TechniqueId::NakedSingle
    }

    fn scan(&self, board: &Board) -> Option<Finding> {
        for cell in Position::ALL {
            if board.value(cell).is_some() {
                continue;
            }
            let Some(digit) = board.candidates(cell).as_single() else {
                continue;
            };
            return Some(Finding {
                technique: self.id(),
                cells: tiny_vec![[Position; 4] => cell],
                action: Action::Place { cell, digit },
                description: format!("Place {digit} in cell {cell}"),
                explanation: format!("Cell {cell} has only one possible candidate: {digit}"),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use explidoku_core::Digit;

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_places_naked_single() {
        TechniqueTester::from_str(
            "
            123 456 78_
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .assert_places(&NakedSingle::new(), Position::new(0, 8), Digit::D9)
        .assert_explains(&NakedSingle::new(), "only one possible candidate: 9")
        .assert_explains(&NakedSingle::new(), "(1,9)");
    }

    #[test]
    fn test_tie_break_is_row_major() {
        // Three naked singles: (0,8), (1,0), and (2,8). Row-major order
        // makes (0,8) the reported one.
        TechniqueTester::from_str(
            "
            123 456 78_
            ___ ___ ___
            456 789 12_
            2__ ___ ___
            5__ ___ ___
            6__ ___ ___
            ___ ___ ___
            8__ ___ ___
            9__ ___ ___
        ",
        )
        .assert_places(&NakedSingle::new(), Position::new(0, 8), Digit::D9);
    }

    #[test]
    fn test_no_finding_on_fresh_board() {
        TechniqueTester::from_str(
            "
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .assert_no_finding(&NakedSingle::new());
    }

    #[test]
    fn test_apply_propagates_to_peers() {
        TechniqueTester::from_str(
            "
            123 456 78_
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .apply_once(&NakedSingle::new())
        // 9 is gone from the rest of column 8 and box 2.
        .assert_candidates(
            Position::new(1, 8),
            [Digit::D1, Digit::D2, Digit::D3, Digit::D4, Digit::D5, Digit::D6],
        )
        .assert_candidates(
            Position::new(8, 8),
            Digit::ALL.into_iter().filter(|d| *d != Digit::D9),
        );
    }
}
