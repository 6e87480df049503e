//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};

/// Every row, column and diagonal, as position triples.
pub static WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `player` holds all three squares of some line.
pub fn is_winner(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Returns the player holding a complete line, if any.
///
/// X is checked before O; legal play never produces both.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| is_winner(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!is_winner(&board, Player::X));
        assert!(!is_winner(&board, Player::O));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert!(is_winner(&board, Player::X));
        assert!(!is_winner(&board, Player::O));
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Player::O));
            }
            assert!(is_winner(&board, Player::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO......".parse().unwrap();
        assert_eq!(winner(&board), None);
    }
}
