use explidoku_core::{Board, Digit, Position, Unit};
use tinyvec::TinyVec;

use crate::{
    Action, Elimination, Finding, TechniqueId,
    step::list_cells,
    technique::Technique,
};

/// A technique that eliminates candidates confined to one line of a box.
///
/// When every cell of a box that still admits a digit lies in a single row
/// or column, the digit must be placed on that line inside the box, so it
/// can be removed from the rest of the line outside the box. Two carriers
/// make a pointing pair, three a pointing triple.
///
/// The scan visits boxes 0-8 and digits in ascending order, checking row
/// confinement before column confinement, and only reports a finding that
/// removes at least one candidate still present on the board.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pointing;

impl Pointing {
    /// Creates a new `Pointing` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for Pointing {
    fn id(&self) -> TechniqueId {
        TechniqueId::Pointing
    }

    fn scan(&self, board: &Board) -> Option<Finding> {
        for box_index in 0..9 {
            let box_unit = Unit::Box(box_index);
            for digit in Digit::ALL {
                let carriers: TinyVec<[Position; 4]> = box_unit
                    .cells()
                    .iter()
                    .copied()
                    .filter(|&cell| board.candidates(cell).contains(digit))
                    .collect();
                // A lone carrier is a hidden single, handled earlier in the
                // priority order.
                if carriers.len() < 2 {
                    continue;
                }

                let row = carriers[0].row();
                let col = carriers[0].col();
                let line = if carriers.iter().all(|cell| cell.row() == row) {
                    Unit::Row(row)
                } else if carriers.iter().all(|cell| cell.col() == col) {
                    Unit::Column(col)
                } else {
                    continue;
                };

                let removals: Vec<Elimination> = line
                    .cells()
                    .iter()
                    .filter(|&&cell| {
                        !box_unit.contains(cell) && board.candidates(cell).contains(digit)
                    })
                    .map(|&cell| Elimination { cell, digit })
                    .collect();
                if removals.is_empty() {
                    continue;
                }

                return Some(Finding {
                    technique: self.id(),
                    action: Action::Eliminate { removals },
                    description: format!("Remove {digit} from {line} outside {box_unit}"),
                    explanation: format!(
                        "All candidates for {digit} in {box_unit} lie in {line} \
                         (cells {carriers}). {digit} must occupy one of those cells, \
                         so it cannot appear elsewhere in {line}.",
                        carriers = list_cells(&carriers),
                    ),
                    cells: carriers,
                });
            }
        }
        None
    }
}
