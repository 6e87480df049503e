//! Classic search puzzles.
//!
//! - **Local search**: steepest-descent hill climbing with random restarts
//!   ([`hill_climb`], [`run_experiment`]) over the [`EightPuzzle`] and
//!   [`EightQueens`] problems
//! - **River crossing**: breadth-first search for the missionaries and
//!   cannibals puzzle ([`RiverPuzzle`])

#![warn(missing_docs)]

pub mod eight_puzzle;
pub mod eight_queens;
mod local_search;
pub mod river;

pub use eight_puzzle::{EightPuzzle, PuzzleState};
pub use eight_queens::{EightQueens, QueensState};
pub use local_search::{Climb, ExperimentReport, LocalSearch, hill_climb, run_experiment};
pub use river::{Bank, Crossing, RiverPuzzle, RiverState};
