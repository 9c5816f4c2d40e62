use explidoku_core::{Board, Unit};
use tinyvec::tiny_vec;

use crate::{
    Action, Elimination, Finding, TechniqueId,
    technique::Technique,
};

/// A technique that eliminates candidates using a naked pair in a unit.
///
/// When two cells of a row, column, or box admit exactly the same two
/// digits, those digits must occupy those two cells in some order, so both
/// can be removed from every other cell of the unit.
///
/// Units are scanned in rows, columns, boxes order and cell pairs in
/// reading order; only a pair licensing at least one elimination of a
/// candidate still present on the board is reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedPair;

impl NakedPair {
    /// Creates a new `NakedPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for NakedPair {
    fn id(&self) -> TechniqueId {
        TechniqueId::NakedPair
    }

    fn scan(&self, board: &Board) -> Option<Finding> {
        for unit in Unit::ALL {
            let cells = unit.cells();
            for (i, &first) in cells.iter().enumerate() {
                let pair = board.candidates(first);
                if pair.len() != 2 {
                    continue;
                }
                for &second in &cells[i + 1..] {
                    if board.candidates(second) != pair {
                        continue;
                    }

                    let removals: Vec<Elimination> = cells
                        .iter()
                        .filter(|&&cell| cell != first && cell != second)
                        .flat_map(|&cell| {
                            let shared = board.candidates(cell).intersection(pair);
                            shared.iter().map(move |digit| Elimination { cell, digit })
                        })
                        .collect();
                    if removals.is_empty() {
                        continue;
                    }

                    let mut digits = pair.iter();
                    let (Some(a), Some(b)) = (digits.next(), digits.next()) else {
                        continue;
                    };
                    return Some(Finding {
                        technique: self.id(),
                        cells: tiny_vec![first, second],
                        action: Action::Eliminate { removals },
                        description: format!(
                            "Remove {a} and {b} from other cells in {unit}"
                        ),
                        explanation: format!(
                            "Cells {first} and {second} in {unit} both allow only \
                             {a} and {b}. Those two digits must occupy those two \
                             cells, so no other cell in {unit} can hold either."
                        ),
                    });
                }
            }
        }
        None
    }
}
