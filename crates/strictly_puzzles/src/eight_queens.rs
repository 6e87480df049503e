//! The 8-queens problem as a local-search problem.
//!
//! A state places one queen per column: `rows[col]` is that queen's row.

use crate::local_search::LocalSearch;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Board width and queen count.
pub const QUEENS: usize = 8;

/// One queen per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueensState {
    rows: [u8; QUEENS],
}

impl QueensState {
    /// Wraps a column-to-row assignment.
    pub fn new(rows: [u8; QUEENS]) -> Self {
        Self { rows }
    }

    /// Returns the row of each column's queen.
    pub fn rows(&self) -> &[u8; QUEENS] {
        &self.rows
    }

    /// Pairs of queens sharing a row or a diagonal.
    pub fn attacking_pairs(&self) -> u32 {
        let mut conflicts = 0;
        for i in 0..QUEENS {
            for j in (i + 1)..QUEENS {
                let (a, b) = (self.rows[i], self.rows[j]);
                if a == b || a.abs_diff(b) as usize == j - i {
                    conflicts += 1;
                }
            }
        }
        conflicts
    }

    /// Every state that moves a single queen within its column.
    pub fn neighbors(&self) -> Vec<QueensState> {
        let mut out = Vec::with_capacity(QUEENS * (QUEENS - 1));
        for col in 0..QUEENS {
            for row in 0..QUEENS as u8 {
                if row != self.rows[col] {
                    let mut rows = self.rows;
                    rows[col] = row;
                    out.push(QueensState { rows });
                }
            }
        }
        out
    }
}

impl std::fmt::Display for QueensState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..QUEENS as u8 {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = self
                .rows
                .iter()
                .map(|&r| if r == row { 'Q' } else { '.' })
                .collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// 8-queens search: attacking-pair cost, random permutation starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EightQueens;

impl LocalSearch for EightQueens {
    type State = QueensState;

    fn name(&self) -> &'static str {
        "8-queens"
    }

    fn cost(&self, state: &QueensState) -> u32 {
        state.attacking_pairs()
    }

    fn neighbors(&self, state: &QueensState) -> Vec<QueensState> {
        state.neighbors()
    }

    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> QueensState {
        let mut rows = [0u8; QUEENS];
        for (i, r) in rows.iter_mut().enumerate() {
            *r = i as u8;
        }
        rows.shuffle(rng);
        QueensState { rows }
    }
}
