//! Tests for the minimax search engine.

use std::collections::HashSet;
use strictly_tictactoe::{
    Board, Game, GameStatus, Player, Position, SearchEngine, Square, best_move, is_terminal,
    winner,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

/// Every non-terminal board reachable by legal play, with the player to move.
fn reachable_positions() -> Vec<(Board, Player)> {
    fn walk(board: &mut Board, to_move: Player, seen: &mut HashSet<(Board, Player)>) {
        if is_terminal(board) || !seen.insert((board.clone(), to_move)) {
            return;
        }
        for pos in Position::ALL {
            if board.is_empty(pos) {
                board.set(pos, Square::Occupied(to_move));
                walk(board, to_move.opponent(), seen);
                board.set(pos, Square::Empty);
            }
        }
    }

    let mut seen = HashSet::new();
    for first in [Player::X, Player::O] {
        walk(&mut Board::new(), first, &mut seen);
    }
    seen.into_iter().collect()
}

/// Every finished board reachable by legal play, from either first mover.
fn reachable_terminal_boards() -> HashSet<Board> {
    fn walk(board: &mut Board, to_move: Player, terminal: &mut HashSet<Board>) {
        if is_terminal(board) {
            terminal.insert(board.clone());
            return;
        }
        for pos in Position::ALL {
            if board.is_empty(pos) {
                board.set(pos, Square::Occupied(to_move));
                walk(board, to_move.opponent(), terminal);
                board.set(pos, Square::Empty);
            }
        }
    }

    let mut terminal = HashSet::new();
    for first in [Player::X, Player::O] {
        walk(&mut Board::new(), first, &mut terminal);
    }
    terminal
}

#[test]
fn test_every_terminal_board_scores_by_depth_alone() {
    let terminal = reachable_terminal_boards();
    assert!(terminal.len() > 900);

    for engine in [SearchEngine::default(), SearchEngine::exhaustive()] {
        for finished in &terminal {
            let expected = |depth: i32| match winner(finished) {
                Some(Player::X) => 10 - depth,
                Some(Player::O) => depth - 10,
                None => 0,
            };
            for (lower, upper) in [(i32::MIN, i32::MAX), (5, 6), (0, 0), (-3, -10), (20, -20)] {
                for depth in [0, 1, 4, 9] {
                    for maximizing in [true, false] {
                        let mut b = finished.clone();
                        let score = engine.evaluate(&mut b, depth, lower, upper, maximizing);
                        assert_eq!(score, expected(depth), "{}", finished.display());
                        assert_eq!(&b, finished);
                    }
                }
            }
        }
    }
}

#[test]
fn test_empty_board_is_a_draw() {
    let decision = SearchEngine::default().decide(&mut Board::new()).unwrap();
    assert_eq!(decision.score, 0);
}

#[test]
fn test_completes_winning_row() {
    let mut b = board("XX.OO....");
    assert_eq!(best_move(&mut b).unwrap().to_index(), 2);
}

#[test]
fn test_blocks_opponent_row() {
    // O threatens the top row and X has no line of its own to finish.
    let mut b = board("OO.X....X");
    assert_eq!(best_move(&mut b).unwrap().to_index(), 2);
}

#[test]
fn test_immediate_win_outranks_block() {
    // O threatens 2, but X completes the middle row at 5 first.
    let mut b = board("OO.XX....");
    let decision = SearchEngine::default().decide(&mut b).unwrap();
    assert_eq!(decision.position.to_index(), 5);
    assert_eq!(decision.score, 10);
}

#[test]
fn test_prefers_faster_win() {
    // X can win now at 2, or set up slower wins elsewhere.
    let mut b = board("XX..O..O.");
    let decision = SearchEngine::default().decide(&mut b).unwrap();
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.score, 10);
}

#[test]
fn test_first_index_wins_ties() {
    // Both 2 (top row) and 6 (left column) win immediately for X.
    let mut b = board("XX.XOO..O");
    let engine = SearchEngine::default();

    let mut via_six = b.clone();
    via_six.set(Position::BottomLeft, Square::Occupied(Player::X));
    assert_eq!(engine.evaluate(&mut via_six, 0, i32::MIN, i32::MAX, false), 10);

    let decision = engine.decide(&mut b).unwrap();
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.score, 10);
}

#[test]
fn test_board_unchanged_after_search() {
    for (mut b, to_move) in reachable_positions() {
        let before = b.clone();
        let engine = SearchEngine::default();
        engine.evaluate(&mut b, 0, i32::MIN, i32::MAX, to_move == Player::X);
        assert_eq!(b, before);
        if to_move == Player::X {
            engine.decide(&mut b).unwrap();
            assert_eq!(b, before);
        }
    }
}

#[test]
fn test_pruning_preserves_root_score() {
    let pruned = SearchEngine::default();
    let exhaustive = SearchEngine::exhaustive();

    for (mut b, to_move) in reachable_positions() {
        let maximizing = to_move == Player::X;
        let a = pruned.evaluate(&mut b, 0, i32::MIN, i32::MAX, maximizing);
        let e = exhaustive.evaluate(&mut b, 0, i32::MIN, i32::MAX, maximizing);
        assert_eq!(a, e, "board:\n{}", b.display());
    }
}

#[test]
fn test_pruning_preserves_decision() {
    let pruned = SearchEngine::default();
    let exhaustive = SearchEngine::exhaustive();

    for (mut b, to_move) in reachable_positions() {
        if to_move != Player::X {
            continue;
        }
        let a = pruned.decide(&mut b).unwrap();
        let e = exhaustive.decide(&mut b).unwrap();
        assert_eq!((a.position, a.score), (e.position, e.score), "board:\n{}", b.display());
    }
}

#[test]
fn test_never_loses() {
    fn play_out(game: &Game, engine: &SearchEngine, games: &mut usize) {
        match game.status() {
            GameStatus::Won(Player::O) => panic!("AI lost:\n{}", game.board().display()),
            GameStatus::Won(Player::X) | GameStatus::Draw => {
                *games += 1;
                return;
            }
            GameStatus::InProgress => {}
        }

        if game.to_move() == Player::X {
            let mut board = game.board().clone();
            let pos = engine.best_move(&mut board).unwrap();
            let mut next = game.clone();
            next.make_move(pos).unwrap();
            play_out(&next, engine, games);
        } else {
            for pos in game.board().empty_positions() {
                let mut next = game.clone();
                next.make_move(pos).unwrap();
                play_out(&next, engine, games);
            }
        }
    }

    let engine = SearchEngine::default();
    for first in [Player::X, Player::O] {
        let mut games = 0;
        play_out(&Game::new(first), &engine, &mut games);
        assert!(games > 0);
    }
}

#[test]
fn test_decision_serializes() {
    let decision = SearchEngine::default()
        .decide(&mut board("XX.OO...."))
        .unwrap();
    let json = serde_json::to_value(decision).unwrap();
    assert_eq!(json["position"], "TopRight");
    assert_eq!(json["score"], 10);
}
