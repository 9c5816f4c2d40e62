//! Deduction records: what a technique found and what the solver applied.

use explidoku_core::{Digit, Grid, Position};
use tinyvec::TinyVec;

/// Identifier of a solving technique, in priority order.
///
/// The solver tries techniques in the declaration order of these variants,
/// easiest first, so every recorded step reflects the simplest deduction
/// that was available at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TechniqueId {
    /// A cell with exactly one remaining candidate.
    #[display("Naked Single")]
    NakedSingle,
    /// A digit with exactly one admitting cell in some unit.
    #[display("Hidden Single")]
    HiddenSingle,
    /// A digit confined to one row or column within a box.
    #[display("Pointing Pair/Triple")]
    Pointing,
    /// Two cells of a unit sharing an identical two-digit candidate set.
    #[display("Naked Pair")]
    NakedPair,
}

/// A single removed candidate: `digit` is no longer possible at `cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elimination {
    /// The cell losing a candidate.
    pub cell: Position,
    /// The removed candidate digit.
    pub digit: Digit,
}

/// The board change a technique proposes.
///
/// A finding is always exactly one of these, never both, so that each step
/// stays independently explainable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Write a digit into a cell.
    Place {
        /// The cell to fill.
        cell: Position,
        /// The digit to write.
        digit: Digit,
    },
    /// Remove candidates that the deduction has excluded.
    ///
    /// Every listed candidate is present on the board at the moment the
    /// finding is produced; applying the action always changes the board.
    Eliminate {
        /// The candidates to remove.
        removals: Vec<Elimination>,
    },
}

/// The result of a successful technique scan.
///
/// Description and explanation are generated from the same bindings that
/// produced the action, so the text can never drift from what the solver
/// actually does.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Which technique produced this finding.
    pub technique: TechniqueId,
    /// The cells that justify the deduction (the single cell for singles,
    /// the pair for naked pairs, the confined carriers for pointing).
    pub cells: TinyVec<[Position; 4]>,
    /// The proposed board change.
    pub action: Action,
    /// One-line summary, e.g. `"Place 5 in cell (3,4)"`.
    pub description: String,
    /// Prose explanation of why the action is forced.
    pub explanation: String,
}

/// One applied deduction in a solve trace.
///
/// Steps are assembled by the solver at the moment a finding is applied and
/// never mutated afterwards; the returned trace owns them.
#[derive(Debug, Clone)]
pub struct Step {
    index: usize,
    technique: TechniqueId,
    description: String,
    explanation: String,
    affected_cells: Vec<Position>,
    eliminations: Vec<Elimination>,
    snapshot: Grid,
}

impl Step {
    pub(crate) fn new(
        index: usize,
        finding: &Finding,
        eliminations: Vec<Elimination>,
        snapshot: Grid,
    ) -> Self {
        Self {
            index,
            technique: finding.technique,
            description: finding.description.clone(),
            explanation: finding.explanation.clone(),
            affected_cells: finding.cells.to_vec(),
            eliminations,
            snapshot,
        }
    }

    /// Returns the 0-based position of this step in the trace.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the technique that produced this step.
    #[must_use]
    pub const fn technique(&self) -> TechniqueId {
        self.technique
    }

    /// Returns the one-line summary of the action.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the prose explanation of the deduction.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Returns the cells that justified the deduction.
    #[must_use]
    pub fn affected_cells(&self) -> &[Position] {
        &self.affected_cells
    }

    /// Returns the candidates removed by this step.
    ///
    /// For placement steps these are the peer candidates cleared by
    /// constraint propagation; for elimination steps, the eliminations
    /// themselves.
    #[must_use]
    pub fn eliminations(&self) -> &[Elimination] {
        &self.eliminations
    }

    /// Returns the board values immediately after this step was applied.
    #[must_use]
    pub const fn snapshot(&self) -> &Grid {
        &self.snapshot
    }
}

/// Formats cells as `"(1,2)"`, `"(1,2) and (3,4)"`, or
/// `"(1,2), (3,4) and (5,6)"` for explanation text.
pub(crate) fn list_cells(cells: &[Position]) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            if i + 1 == cells.len() {
                out.push_str(" and ");
            } else {
                out.push_str(", ");
            }
        }
        let _ = write!(out, "{cell}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technique_display_names() {
        assert_eq!(TechniqueId::NakedSingle.to_string(), "Naked Single");
        assert_eq!(TechniqueId::HiddenSingle.to_string(), "Hidden Single");
        assert_eq!(TechniqueId::Pointing.to_string(), "Pointing Pair/Triple");
        assert_eq!(TechniqueId::NakedPair.to_string(), "Naked Pair");
    }

    #[test]
    fn test_list_cells() {
        let a = Position::new(0, 1);
        let b = Position::new(2, 3);
        let c = Position::new(4, 5);
        assert_eq!(list_cells(&[a]), "(1,2)");
        assert_eq!(list_cells(&[a, b]), "(1,2) and (3,4)");
        assert_eq!(list_cells(&[a, b, c]), "(1,2), (3,4) and (5,6)");
    }
}
