//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Terminal classification
//! is derived from these on demand and never stored.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, is_winner, winner};

use crate::Board;

/// Returns true if either player has won or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}
