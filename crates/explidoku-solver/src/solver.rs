//! The fixed-point solving loop.

use explidoku_core::{Board, Grid, ValidationError};

use crate::{
    Action, Elimination, Finding, Step,
    technique::{BoxedTechnique, all_techniques},
};

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// Every cell is filled and all 27 unit invariants hold.
    Solved,
    /// No implemented technique can make further progress on an incomplete
    /// board. This is a reportable result, not an error.
    Stuck,
}

/// The result of a solve: outcome, final board values, and the step trace.
#[derive(Debug, Clone)]
pub struct Solution {
    outcome: Outcome,
    grid: Grid,
    steps: Vec<Step>,
}

impl Solution {
    /// Returns whether the puzzle was solved or the solver got stuck.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the board values after the last applied step.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the ordered deduction trace.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// A solver driving an ordered list of techniques to a fixed point.
///
/// Each cycle queries the techniques in priority order, applies the first
/// finding, and records a [`Step`]. The loop terminates because every
/// applied action strictly reduces the total candidate count plus unfilled
/// cell count, which is bounded below by zero.
///
/// # Examples
///
/// ```
/// use explidoku_solver::Solver;
///
/// let grid = "
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
///
/// let solution = Solver::new().solve(&grid)?;
/// assert!(solution.outcome().is_solved());
/// # Ok::<(), explidoku_core::ValidationError>(())
/// ```
#[derive(Debug)]
pub struct Solver {
    techniques: Vec<BoxedTechnique>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a solver with the full technique set in priority order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            techniques: all_techniques(),
        }
    }

    /// Creates a solver with a custom technique list.
    ///
    /// Techniques are queried in the order they appear, so the list defines
    /// both the available deductions and their priority.
    #[must_use]
    pub fn with_techniques(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Solves the grid as far as the technique set allows, recording every
    /// deduction.
    ///
    /// An already-solved grid returns immediately with [`Outcome::Solved`]
    /// and an empty trace. An incomplete board that no technique can
    /// advance returns [`Outcome::Stuck`] with the partial trace and board.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the grid's givens conflict with
    /// each other, before any step is produced.
    pub fn solve(&self, grid: &Grid) -> Result<Solution, ValidationError> {
        let mut board = Board::from_grid(grid)?;
        let mut steps = Vec::new();

        let outcome = loop {
            if board.is_complete() {
                break Outcome::Solved;
            }
            let Some(finding) = self.next_finding(&board) else {
                break Outcome::Stuck;
            };
            let eliminations = apply_finding(&mut board, &finding)?;
            let step = Step::new(steps.len(), &finding, eliminations, board.snapshot());
            log::debug!(
                "step {}: {}: {}",
                step.index() + 1,
                step.technique(),
                step.description()
            );
            steps.push(step);
        };

        log::debug!("finished after {} steps: {outcome:?}", steps.len());
        Ok(Solution {
            outcome,
            grid: board.snapshot(),
            steps,
        })
    }

    fn next_finding(&self, board: &Board) -> Option<Finding> {
        for technique in &self.techniques {
            if let Some(finding) = technique.scan(board) {
                return Some(finding);
            }
            log::trace!("{} does not apply", technique.id());
        }
        None
    }
}

/// Applies a finding to the board and returns the eliminations to record:
/// the finding's own removals, or the peer candidates cleared by a
/// placement's constraint propagation.
pub(crate) fn apply_finding(
    board: &mut Board,
    finding: &Finding,
) -> Result<Vec<Elimination>, ValidationError> {
    match &finding.action {
        Action::Place { cell, digit } => {
            let changed = board.place(*cell, *digit)?;
            Ok(changed
                .into_iter()
                .map(|peer| Elimination {
                    cell: peer,
                    digit: *digit,
                })
                .collect())
        }
        Action::Eliminate { removals } => {
            for removal in removals {
                let removed = board.eliminate(removal.cell, removal.digit);
                debug_assert!(removed, "scan proposed an absent candidate: {removal:?}");
            }
            Ok(removals.clone())
        }
    }
}

/// Solves a grid with the full technique set, step by step.
///
/// This is the engine entry point for I/O shells: a pure function of the
/// grid that returns the final board values and the ordered step trace.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the grid's givens conflict with each
/// other, before any step is produced. (Shape and range errors are raised
/// even earlier, when the caller builds the [`Grid`].)
pub fn solve_step_by_step(grid: &Grid) -> Result<Solution, ValidationError> {
    Solver::new().solve(grid)
}

#[cfg(test)]
mod tests {
    use explidoku_core::{Digit, Position, Unit};

    use super::*;
    use crate::TechniqueId;

    fn solve(s: &str) -> Solution {
        solve_step_by_step(&s.parse().unwrap()).unwrap()
    }

    const CLASSIC: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    #[test]
    fn test_classic_puzzle_solves() {
        let solution = solve(CLASSIC);
        assert_eq!(solution.outcome(), Outcome::Solved);
        assert!(!solution.steps().is_empty());
        assert!(solution.grid().is_filled());

        // All 27 unit invariants hold on the final board.
        for unit in Unit::ALL {
            let mut seen = [false; 9];
            for cell in unit.cells() {
                let digit = solution.grid().get(cell).unwrap();
                let slot = &mut seen[usize::from(digit.value()) - 1];
                assert!(!*slot, "{digit} appears twice in {unit}");
                *slot = true;
            }
        }
    }

    #[test]
    fn test_integer_grid_entry_point() {
        let grid = Grid::from_values(&[
            [5, 3, 0, 0, 7, 0, 0, 0, 0],
            [6, 0, 0, 1, 9, 5, 0, 0, 0],
            [0, 9, 8, 0, 0, 0, 0, 6, 0],
            [8, 0, 0, 0, 6, 0, 0, 0, 3],
            [4, 0, 0, 8, 0, 3, 0, 0, 1],
            [7, 0, 0, 0, 2, 0, 0, 0, 6],
            [0, 6, 0, 0, 0, 0, 2, 8, 0],
            [0, 0, 0, 4, 1, 9, 0, 0, 5],
            [0, 0, 0, 0, 8, 0, 0, 7, 9],
        ])
        .unwrap();
        assert_eq!(grid, CLASSIC.parse::<Grid>().unwrap());
        let solution = solve_step_by_step(&grid).unwrap();
        assert!(solution.outcome().is_solved());
    }

    #[test]
    fn test_peer_uniqueness_holds_after_every_step() {
        let solution = solve(CLASSIC);
        for step in solution.steps() {
            let snapshot = step.snapshot();
            for cell in Position::ALL {
                let Some(digit) = snapshot.get(cell) else {
                    continue;
                };
                for peer in cell.peers() {
                    assert_ne!(
                        snapshot.get(peer),
                        Some(digit),
                        "step {}: {digit} at both {cell} and {peer}",
                        step.index()
                    );
                }
            }
        }
    }

    #[test]
    fn test_eliminations_were_present_before_and_absent_after() {
        let grid: Grid = CLASSIC.parse().unwrap();
        let mut board = Board::from_grid(&grid).unwrap();
        let solver = Solver::new();

        while !board.is_complete() {
            let Some(finding) = solver.next_finding(&board) else {
                break;
            };
            if let Action::Eliminate { removals } = &finding.action {
                for removal in removals {
                    assert!(board.candidates(removal.cell).contains(removal.digit));
                }
            }
            let recorded = apply_finding(&mut board, &finding).unwrap();
            for removal in &recorded {
                assert!(!board.candidates(removal.cell).contains(removal.digit));
            }
        }
    }

    #[test]
    fn test_solved_grid_is_idempotent() {
        let solution = solve(CLASSIC);
        let resolved = solve_step_by_step(solution.grid()).unwrap();
        assert_eq!(resolved.outcome(), Outcome::Solved);
        assert!(resolved.steps().is_empty());
        assert_eq!(resolved.grid(), solution.grid());
    }

    #[test]
    fn test_conflicting_givens_fail_before_any_step() {
        let grid: Grid = "
            5__ __5 ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        "
        .parse()
        .unwrap();
        let err = solve_step_by_step(&grid).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ConflictingGiven {
                digit: Digit::D5,
                first: Position::new(0, 0),
                second: Position::new(0, 5),
            }
        );
    }

    #[test]
    fn test_empty_grid_is_stuck_with_empty_trace() {
        let solution = solve_step_by_step(&Grid::new()).unwrap();
        assert_eq!(solution.outcome(), Outcome::Stuck);
        assert!(solution.steps().is_empty());
        assert_eq!(solution.grid().filled_count(), 0);
    }

    #[test]
    fn test_naked_single_takes_priority_over_hidden_single() {
        // Row 0 leaves exactly one candidate (9) at (0,8): a naked single.
        // The same placement is also a hidden single in row 0, and other
        // hidden singles exist elsewhere; the trace must start with the
        // naked single.
        let solution = solve(
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
        );
        let first = &solution.steps()[0];
        assert_eq!(first.technique(), TechniqueId::NakedSingle);
        assert_eq!(first.affected_cells(), &[Position::new(0, 8)]);
    }

    #[test]
    fn test_naked_single_only_puzzle_uses_only_naked_singles() {
        // One empty cell per unit: every deduction is a naked single.
        let solution = solve(
            "
            _34 678 912
            672 195 348
            198 342 567
            859 761 423
            426 853 791
            713 924 856
            961 537 284
            287 419 635
            345 286 17_
        ",
        );
        assert_eq!(solution.outcome(), Outcome::Solved);
        assert!(!solution.steps().is_empty());
        for step in solution.steps() {
            assert_eq!(step.technique(), TechniqueId::NakedSingle);
        }
    }

    #[test]
    fn test_mixed_technique_puzzle_solves() {
        // A sparser clue set over the same solution; singles alone stall
        // and the trace draws on all four techniques.
        let solution = solve(
            "
            5__ 6__ 9_2
            ___ 1_5 3_8
            ___ ___ 5__
            8__ __1 _2_
            ___ __3 ___
            _1_ 92_ 8__
            _6_ 5__ __4
            28_ ___ ___
            3_5 ___ _7_
        ",
        );
        assert_eq!(solution.outcome(), Outcome::Solved);
        let used: Vec<TechniqueId> = solution.steps().iter().map(Step::technique).collect();
        for expected in [
            TechniqueId::NakedSingle,
            TechniqueId::HiddenSingle,
            TechniqueId::Pointing,
            TechniqueId::NakedPair,
        ] {
            assert!(used.contains(&expected), "{expected} never fired");
        }
    }

    #[test]
    fn test_steps_are_contiguously_indexed() {
        let solution = solve(CLASSIC);
        for (i, step) in solution.steps().iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn test_placement_steps_record_propagated_eliminations() {
        let solution = solve(CLASSIC);
        let first = &solution.steps()[0];
        assert!(
            !first.eliminations().is_empty(),
            "the first placement on a fresh board must clear peer candidates"
        );
        for elimination in first.eliminations() {
            assert!(first.affected_cells()[0].sees(elimination.cell));
        }
    }

    #[test]
    fn test_custom_technique_list_restricts_deductions() {
        use crate::technique::{NakedPair, Pointing};

        // Elimination-only techniques can trim candidates but never place
        // a digit, so the classic puzzle ends stuck with its givens
        // untouched.
        let solver = Solver::with_techniques(vec![
            Box::new(Pointing::new()),
            Box::new(NakedPair::new()),
        ]);
        let solution = solver.solve(&CLASSIC.parse().unwrap()).unwrap();
        assert_eq!(solution.outcome(), Outcome::Stuck);
        assert!(!solution.steps().is_empty());
        assert_eq!(solution.grid().filled_count(), 30);
        for step in solution.steps() {
            assert!(matches!(
                step.technique(),
                TechniqueId::Pointing | TechniqueId::NakedPair
            ));
        }
    }
}
