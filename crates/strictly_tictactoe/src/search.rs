//! Alpha-beta minimax search for tic-tac-toe.
//!
//! X is always the maximizing player and O the minimizing one. Scores are
//! `10 - depth` for an X win, `depth - 10` for an O win and `0` for a draw,
//! where `depth` counts plies below the search root. Faster wins and slower
//! losses therefore score better.
//!
//! The search mutates one board in place. Every tentative mark is held by a
//! [`Placement`] guard that clears the square when dropped, so the board is
//! restored on every exit path, including pruning cut-offs.

use crate::rules::{is_full, is_winner, winner};
use crate::{Board, Player, Position, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score magnitude of an immediate win.
pub const WIN_SCORE: i32 = 10;

/// Whether the engine cuts off dominated subtrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pruning {
    /// Alpha-beta cut-offs.
    #[default]
    AlphaBeta,
    /// Visit every continuation.
    Disabled,
}

/// The move chosen for X and what it guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Square to play.
    pub position: Position,
    /// Root score under optimal play by both sides.
    pub score: i32,
    /// Nodes visited while deciding.
    pub nodes: u64,
}

/// Why the engine refused to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchErrorKind {
    /// No empty square remains.
    #[display("board is full")]
    BoardFull,
    /// A player already holds a line.
    #[display("game already won by {}", _0)]
    GameOver(Player),
}

/// Precondition violation: the engine was asked to move on a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Search precondition violated: {} at {}:{}", kind, file, line)]
pub struct SearchError {
    /// What was wrong with the board.
    pub kind: SearchErrorKind,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl SearchError {
    /// Creates a new search error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SearchErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A mark placed for the duration of one recursive step.
struct Placement<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, pos: Position, player: Player) -> Self {
        board.set(pos, Square::Occupied(player));
        Self { board, pos }
    }

    fn board(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, Square::Empty);
    }
}

/// Minimax game-tree search.
///
/// Holds configuration only; each call traverses afresh and the board is
/// borrowed for the duration of that call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchEngine {
    pruning: Pruning,
}

impl SearchEngine {
    /// Creates an engine with the given pruning mode.
    pub fn new(pruning: Pruning) -> Self {
        Self { pruning }
    }

    /// Engine that visits every node.
    pub fn exhaustive() -> Self {
        Self::new(Pruning::Disabled)
    }

    /// Returns the pruning mode.
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Scores `board` with `maximizing` indicating whether X is to move.
    ///
    /// Terminal boards are scored without looking at the bounds. The board
    /// is left exactly as it was passed in.
    pub fn evaluate(
        &self,
        board: &mut Board,
        depth: i32,
        lower: i32,
        upper: i32,
        maximizing: bool,
    ) -> i32 {
        let mut nodes = 0;
        self.search(board, depth, lower, upper, maximizing, &mut nodes)
    }

    /// Picks the best square for X.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the board is already won or full. Callers
    /// must only ask for a move while the game is in progress.
    pub fn best_move(&self, board: &mut Board) -> Result<Position, SearchError> {
        self.decide(board).map(|decision| decision.position)
    }

    /// Picks the best square for X and reports its score.
    ///
    /// Each empty square is tried in ascending order with a fresh window;
    /// the first square reaching the highest score wins ties.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the board is already won or full.
    #[instrument(skip(self, board), fields(pruning = ?self.pruning, occupied = board.occupied_count()))]
    pub fn decide(&self, board: &mut Board) -> Result<Decision, SearchError> {
        if let Some(player) = winner(board) {
            return Err(SearchError::new(SearchErrorKind::GameOver(player)));
        }

        let mut nodes = 0;
        let mut best: Option<(Position, i32)> = None;

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }

            let score = {
                let mut placed = Placement::new(board, pos, Player::X);
                self.search(placed.board(), 0, i32::MIN, i32::MAX, false, &mut nodes)
            };
            debug!(position = %pos, score, "Root move scored");

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        let (position, score) = best.ok_or_else(|| SearchError::new(SearchErrorKind::BoardFull))?;
        debug!(position = %position, score, nodes, "Move chosen");
        Ok(Decision {
            position,
            score,
            nodes,
        })
    }

    fn search(
        &self,
        board: &mut Board,
        depth: i32,
        mut lower: i32,
        mut upper: i32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;

        if is_winner(board, Player::X) {
            return WIN_SCORE - depth;
        }
        if is_winner(board, Player::O) {
            return depth - WIN_SCORE;
        }
        if is_full(board) {
            return 0;
        }

        let mover = if maximizing { Player::X } else { Player::O };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }

            let score = {
                let mut placed = Placement::new(board, pos, mover);
                self.search(placed.board(), depth + 1, lower, upper, !maximizing, nodes)
            };

            if maximizing {
                best = best.max(score);
                lower = lower.max(best);
            } else {
                best = best.min(score);
                upper = upper.min(best);
            }

            if self.pruning == Pruning::AlphaBeta && upper <= lower {
                break;
            }
        }

        best
    }
}

/// Picks the best square for X with the default alpha-beta engine.
///
/// # Errors
///
/// Returns [`SearchError`] if the board is already won or full.
pub fn best_move(board: &mut Board) -> Result<Position, SearchError> {
    SearchEngine::default().best_move(board)
}
