use explidoku_core::{Board, Digit, Position, Unit};
use tinyvec::tiny_vec;

use crate::{Action, Finding, TechniqueId, technique::Technique};

/// A technique that finds digits with only one admitting cell in a unit.
///
/// A digit may fit in only one cell of a row, column, or box even though
/// that cell still has other candidates — the single is "hidden" among
/// them. Units are scanned in rows, columns, boxes order and digits in
/// ascending order, which fixes the tie-break.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for HiddenSingle {
    fn id(&self) -> TechniqueId {
        TechniqueId::HiddenSingle
    }

    fn scan(&self, board: &Board) -> Option<Finding> {
        for unit in Unit::ALL {
            let cells = unit.cells();
            for digit in Digit::ALL {
                if cells.iter().any(|&cell| board.value(cell) == Some(digit)) {
                    continue;
                }
                let mut carriers = cells
                    .iter()
                    .filter(|&&cell| board.candidates(cell).contains(digit));
                // Zero carriers means the board is contradictory; that is
                // the stuck signal, not this technique's business.
                let Some(&cell) = carriers.next() else {
                    continue;
                };
                if carriers.next().is_some() {
                    continue;
                }
                return Some(Finding {
                    technique: self.id(),
                    cells: tiny_vec![[Position; 4] => cell],
                    action: Action::Place { cell, digit },
                    description: format!("Place {digit} in cell {cell}"),
                    explanation: format!(
                        "Number {digit} can only be placed in {unit} at cell {cell} - \
                         no other cell in that {kind} still allows {digit}",
                        kind = unit_kind(unit),
                    ),
                });
            }
        }
        None
    }
}

const fn unit_kind(unit: Unit) -> &'static str {
    match unit {
        Unit::Row(_) => "row",
        Unit::Column(_) => "column",
        Unit::Box(_) => "box",
    }
}
