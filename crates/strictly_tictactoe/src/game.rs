//! Game state and move application for tic-tac-toe.

use crate::rules::{is_full, winner};
use crate::{Board, Player, Position, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Tic-tac-toe game: board, player to move, status and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with `first` to move.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended and
    /// [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(pos);
        self.to_move = player.opponent();
        self.update_status();

        debug!(position = %pos, status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Updates game status after a move.
    fn update_status(&mut self) {
        if let Some(player) = winner(&self.board) {
            self.status = GameStatus::Won(player);
        } else if is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_alternate() {
        let mut game = Game::new(Player::O);
        assert_eq!(game.to_move(), Player::O);
        game.make_move(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::O));
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::default();
        game.make_move(Position::Center).unwrap();
        assert_eq!(
            game.make_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.history(), &[Position::Center]);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::default();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ] {
            assert_eq!(game.make_move(pos), Ok(GameStatus::InProgress));
        }
        assert_eq!(
            game.make_move(Position::TopRight),
            Ok(GameStatus::Won(Player::X))
        );
        assert_eq!(game.make_move(Position::BottomLeft), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw_ends_game() {
        let mut game = Game::default();
        // X O X / O X X / O X O, played in a legal order.
        let moves = [0, 1, 2, 3, 4, 6, 5, 8, 7];
        let mut status = GameStatus::InProgress;
        for index in moves {
            status = game.make_move(Position::from_index(index).unwrap()).unwrap();
        }
        assert_eq!(status, GameStatus::Draw);
    }
}
