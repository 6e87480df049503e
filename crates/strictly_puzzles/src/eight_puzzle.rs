//! The 8-puzzle as a local-search problem.

use crate::local_search::LocalSearch;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Tile layout in row-major order; `0` is the blank.
pub type Tiles = [[u8; 3]; 3];

/// Solved layout.
pub const GOAL: Tiles = [[1, 2, 3], [4, 5, 6], [7, 8, 0]];

/// Blank moves in neighbor order: up, down, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Default number of random blank moves used to scramble the goal.
pub const DEFAULT_SCRAMBLE_MOVES: usize = 1000;

/// An 8-puzzle board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleState {
    tiles: Tiles,
}

impl PuzzleState {
    /// Wraps a tile layout.
    pub fn new(tiles: Tiles) -> Self {
        Self { tiles }
    }

    /// The solved board.
    pub fn goal() -> Self {
        Self::new(GOAL)
    }

    /// Returns the tiles.
    pub fn tiles(&self) -> &Tiles {
        &self.tiles
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> Option<(usize, usize)> {
        (0..3)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .find(|&(row, col)| self.tiles[row][col] == 0)
    }

    /// Sum over non-blank tiles of the grid distance to the tile's goal square.
    pub fn manhattan_distance(&self) -> u32 {
        let mut distance = 0;
        for (row, line) in self.tiles.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 {
                    let target_row = (value as usize - 1) / 3;
                    let target_col = (value as usize - 1) % 3;
                    distance += row.abs_diff(target_row) + col.abs_diff(target_col);
                }
            }
        }
        distance as u32
    }

    /// Boards reachable by sliding one tile into the blank.
    pub fn neighbors(&self) -> Vec<PuzzleState> {
        let Some((row, col)) = self.blank() else {
            return Vec::new();
        };
        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| self.slide(row, col, dr, dc))
            .collect()
    }

    fn slide(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<PuzzleState> {
        let new_row = row.checked_add_signed(dr).filter(|r| *r < 3)?;
        let new_col = col.checked_add_signed(dc).filter(|c| *c < 3)?;
        let mut tiles = self.tiles;
        tiles[row][col] = tiles[new_row][new_col];
        tiles[new_row][new_col] = 0;
        Some(PuzzleState { tiles })
    }

    /// Applies `moves` random blank slides starting from this board.
    pub fn scrambled<R: Rng + ?Sized>(&self, moves: usize, rng: &mut R) -> PuzzleState {
        let mut state = *self;
        for _ in 0..moves {
            if let Some(next) = state.neighbors().choose(rng) {
                state = *next;
            }
        }
        state
    }
}

impl std::fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.tiles.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|&t| if t == 0 { " ".to_string() } else { t.to_string() })
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// 8-puzzle search: Manhattan-distance cost, random starts scrambled from the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EightPuzzle {
    scramble_moves: usize,
}

impl EightPuzzle {
    /// Creates the problem with the given scramble length.
    pub fn new(scramble_moves: usize) -> Self {
        Self { scramble_moves }
    }

    /// Returns the scramble length.
    pub fn scramble_moves(&self) -> usize {
        self.scramble_moves
    }
}

impl Default for EightPuzzle {
    fn default() -> Self {
        Self::new(DEFAULT_SCRAMBLE_MOVES)
    }
}

impl LocalSearch for EightPuzzle {
    type State = PuzzleState;

    fn name(&self) -> &'static str {
        "8-puzzle"
    }

    fn cost(&self, state: &PuzzleState) -> u32 {
        state.manhattan_distance()
    }

    fn neighbors(&self, state: &PuzzleState) -> Vec<PuzzleState> {
        state.neighbors()
    }

    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> PuzzleState {
        PuzzleState::goal().scrambled(self.scramble_moves, rng)
    }
}
