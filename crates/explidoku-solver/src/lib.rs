//! Human-style Sudoku solving with step-by-step explanations.
//!
//! This crate drives the [`explidoku_core`] board model with an ordered set
//! of logical techniques — naked single, hidden single, pointing
//! pair/triple, and naked pair — and records every deduction as a [`Step`]:
//! the technique, a one-line description, a prose explanation, the cells
//! involved, the candidates removed, and a board snapshot. The trace is
//! what a presentation layer renders; the engine never prints anything
//! itself.
//!
//! # Examples
//!
//! ```
//! use explidoku_core::Grid;
//! use explidoku_solver::{Outcome, solve_step_by_step};
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let solution = solve_step_by_step(&grid)?;
//! assert_eq!(solution.outcome(), Outcome::Solved);
//! for step in solution.steps() {
//!     println!("{}. [{}] {}", step.index() + 1, step.technique(), step.explanation());
//! }
//! # Ok::<(), explidoku_core::ValidationError>(())
//! ```
//!
//! A puzzle the technique set cannot finish terminates with
//! [`Outcome::Stuck`] and a partial trace; that is a normal result, not an
//! error. Only malformed or self-contradictory input fails, with a
//! [`ValidationError`](explidoku_core::ValidationError) before any step is
//! produced.

mod solver;
mod step;
pub mod technique;
pub mod testing;

pub use self::{
    solver::{Outcome, Solution, Solver, solve_step_by_step},
    step::{Action, Elimination, Finding, Step, TechniqueId},
};
