//! Candidate-tracking board with invariant-preserving mutation.

use crate::{Digit, DigitSet, Grid, Position, Unit, ValidationError};

/// One cell of the board: a value, or a set of remaining candidates.
///
/// A filled cell always has an empty candidate set. An empty cell normally
/// has a non-empty one; an empty candidate set on an empty cell means the
/// puzzle is contradictory, which surfaces as a stuck solve rather than a
/// failure.
#[derive(Debug, Clone, Copy)]
struct Cell {
    value: Option<Digit>,
    candidates: DigitSet,
}

impl Cell {
    const fn empty() -> Self {
        Self {
            value: None,
            candidates: DigitSet::FULL,
        }
    }

    const fn filled(digit: Digit) -> Self {
        Self {
            value: Some(digit),
            candidates: DigitSet::EMPTY,
        }
    }
}

/// The 9x9 board with per-cell candidate tracking.
///
/// `Board` owns its 81 cells exclusively and only ever mutates them through
/// operations that preserve the peer-uniqueness invariant: no two filled
/// cells sharing a row, column, or box hold the same digit.
///
/// # Examples
///
/// ```
/// use explidoku_core::{Board, Digit, Grid, Position};
///
/// let grid: Grid = "
///     5__ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
/// "
/// .parse()?;
/// let board = Board::from_grid(&grid)?;
///
/// // The given digit excludes itself from all 20 peers.
/// assert!(!board.candidates(Position::new(0, 5)).contains(Digit::D5));
/// assert!(!board.candidates(Position::new(5, 0)).contains(Digit::D5));
/// assert!(!board.candidates(Position::new(2, 2)).contains(Digit::D5));
/// assert!(board.candidates(Position::new(5, 5)).contains(Digit::D5));
/// # Ok::<(), explidoku_core::ValidationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Cell; 81],
}

impl Board {
    /// Builds a board from a grid of givens and seeds every empty cell's
    /// candidates with 1-9 minus the values its filled peers hold.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ConflictingGiven`] if two givens with the
    /// same digit share a unit. Units are checked in rows, columns, boxes
    /// order and cells within a unit in reading order, so the reported pair
    /// is the first conflict in that scan.
    pub fn from_grid(grid: &Grid) -> Result<Self, ValidationError> {
        for unit in Unit::ALL {
            let mut seen: [Option<Position>; 9] = [None; 9];
            for cell in unit.cells() {
                let Some(digit) = grid.get(cell) else {
                    continue;
                };
                let slot = &mut seen[usize::from(digit.value()) - 1];
                if let Some(first) = *slot {
                    return Err(ValidationError::ConflictingGiven {
                        digit,
                        first,
                        second: cell,
                    });
                }
                *slot = Some(cell);
            }
        }

        let mut cells = [Cell::empty(); 81];
        for (pos, value) in grid.cells() {
            if let Some(digit) = value {
                cells[pos.index()] = Cell::filled(digit);
            }
        }
        let mut board = Self { cells };
        for (pos, value) in grid.cells() {
            if let Some(digit) = value {
                for peer in pos.peers() {
                    board.cells[peer.index()].candidates.remove(digit);
                }
            }
        }
        Ok(board)
    }

    /// Returns the value at a position, or `None` for an empty cell.
    #[must_use]
    pub const fn value(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()].value
    }

    /// Returns the candidate set of a position.
    ///
    /// Filled cells report the empty set.
    #[must_use]
    pub const fn candidates(&self, pos: Position) -> DigitSet {
        self.cells[pos.index()].candidates
    }

    /// Places a digit: sets the value, clears the cell's candidates, and
    /// removes the digit from the candidate sets of all 20 peers.
    ///
    /// Returns the peers whose candidate sets actually changed, in
    /// row-major order, for step recording.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::CellAlreadyFilled`] or
    /// [`ValidationError::NotACandidate`] when the placement would break an
    /// invariant. A technique scanning the current board never proposes
    /// such a placement.
    pub fn place(&mut self, pos: Position, digit: Digit) -> Result<Vec<Position>, ValidationError> {
        let cell = &self.cells[pos.index()];
        if cell.value.is_some() {
            return Err(ValidationError::CellAlreadyFilled { cell: pos });
        }
        if !cell.candidates.contains(digit) {
            return Err(ValidationError::NotACandidate { cell: pos, digit });
        }

        self.cells[pos.index()] = Cell::filled(digit);
        let mut changed = Vec::new();
        for peer in pos.peers() {
            if self.cells[peer.index()].candidates.remove(digit) {
                changed.push(peer);
            }
        }
        Ok(changed)
    }

    /// Removes a digit from a cell's candidates.
    ///
    /// Returns `true` if the candidate was present, `false` for a no-op
    /// (already absent, or the cell is filled).
    pub const fn eliminate(&mut self, pos: Position, digit: Digit) -> bool {
        self.cells[pos.index()].candidates.remove(digit)
    }

    /// Returns `true` if every cell is filled and every unit holds all nine
    /// digits.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        if self.cells.iter().any(|cell| cell.value.is_none()) {
            return false;
        }
        Unit::ALL.iter().all(|unit| {
            let digits: DigitSet = unit
                .cells()
                .iter()
                .filter_map(|&cell| self.value(cell))
                .collect();
            digits == DigitSet::FULL
        })
    }

    /// Returns a display-friendly copy of the current values.
    ///
    /// Candidate sets are internal solver state and are not exposed.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        let mut grid = Grid::new();
        for pos in Position::ALL {
            grid.set(pos, self.value(pos));
        }
        grid
    }
}
