//! Tic-tac-toe board model and minimax player.
//!
//! # Architecture
//!
//! - **Board**: nine [`Square`]s addressed by [`Position`]
//! - **Rules**: pure win/draw queries over a board ([`rules`])
//! - **Search**: alpha-beta minimax choosing X's move ([`SearchEngine`])
//! - **Game**: move application and status tracking for a driver ([`Game`])
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Position, best_move};
//!
//! let mut board: Board = "XX.OO....".parse().unwrap();
//! assert_eq!(best_move(&mut board).unwrap(), Position::TopRight);
//! ```

#![warn(missing_docs)]

mod game;
mod position;
pub mod rules;
mod search;
mod types;

pub use game::{Game, GameStatus, MoveError};
pub use position::Position;
pub use rules::{is_full, is_terminal, is_winner, winner};
pub use search::{
    Decision, Pruning, SearchEngine, SearchError, SearchErrorKind, WIN_SCORE, best_move,
};
pub use types::{Board, BoardParseError, Player, Square};
