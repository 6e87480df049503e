//! Human-vs-AI tic-tac-toe over a text stream.
//!
//! The AI plays X and the human plays O. Input and output are generic so a
//! whole game can be scripted in tests.

use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use strictly_tictactoe::{
    Board, Game, GameStatus, MoveError, Player, Position, SearchEngine, SearchError,
};
use tracing::{debug, info, instrument, warn};

/// A rejected line of human input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// The line was not a number.
    #[display("Invalid input. Enter a number between 1-9.")]
    NotANumber(#[error(not(source))] String),

    /// The number was outside 1-9.
    #[display("Invalid input. Enter a number between 1-9.")]
    OutOfRange(#[error(not(source))] usize),

    /// The square is already taken.
    #[display("Invalid move. Try again.")]
    Occupied(#[error(not(source))] Position),
}

/// Parses a 1-based square number and checks the square is free.
pub fn parse_move(line: &str, board: &Board) -> Result<Position, InputError> {
    let trimmed = line.trim();
    let number: usize = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    let pos = Position::from_number(number).ok_or(InputError::OutOfRange(number))?;
    if !board.is_empty(pos) {
        return Err(InputError::Occupied(pos));
    }
    Ok(pos)
}

/// Failure that ends a game early.
#[derive(Debug, Display, Error, From)]
pub enum DriverError {
    /// Reading or writing the terminal failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),

    /// Input ended before the game did.
    #[display("Input closed before the game finished")]
    #[from(ignore)]
    InputClosed,

    /// The engine was asked to move on a finished board.
    #[display("{}", _0)]
    Search(SearchError),

    /// A validated move was refused by the game.
    #[display("{}", _0)]
    Move(MoveError),
}

/// Who moves first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FirstMove {
    /// The AI (X) opens, as in the classic game.
    #[default]
    Ai,
    /// The human (O) opens.
    Human,
}

impl FirstMove {
    fn player(self) -> Player {
        match self {
            FirstMove::Ai => Player::X,
            FirstMove::Human => Player::O,
        }
    }
}

/// One game between the AI and a human on a pair of text streams.
pub struct Match<R, W> {
    input: R,
    output: W,
    engine: SearchEngine,
    game: Game,
}

impl<R: BufRead, W: Write> Match<R, W> {
    /// Sets up a fresh game.
    pub fn new(input: R, output: W, engine: SearchEngine, first: FirstMove) -> Self {
        Self {
            input,
            output,
            engine,
            game: Game::new(first.player()),
        }
    }

    /// Returns the game so far.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until someone wins or the board fills, then announces the result.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::InputClosed`] if the human's input runs out,
    /// or an I/O error from either stream.
    #[instrument(skip(self), fields(first = %self.game.to_move()))]
    pub fn play(&mut self) -> Result<GameStatus, DriverError> {
        writeln!(self.output, "Tic-Tac-Toe: AI (X) vs Human (O)")?;
        self.render()?;

        while self.game.status() == GameStatus::InProgress {
            let pos = match self.game.to_move() {
                Player::X => self.ai_move()?,
                Player::O => self.human_move()?,
            };
            self.game.make_move(pos)?;
            self.render()?;
        }

        let status = self.game.status();
        let message = match status {
            GameStatus::Won(Player::X) => "AI wins!",
            GameStatus::Won(Player::O) => "You win!",
            _ => "It's a draw!",
        };
        writeln!(self.output, "{}", message)?;
        info!(?status, moves = self.game.history().len(), "Game over");
        Ok(status)
    }

    fn ai_move(&mut self) -> Result<Position, DriverError> {
        let mut board = self.game.board().clone();
        let decision = self.engine.decide(&mut board)?;
        debug!(position = %decision.position, score = decision.score, nodes = decision.nodes, "AI decided");
        writeln!(self.output, "AI chooses position: {}", decision.position.to_number())?;
        Ok(decision.position)
    }

    fn human_move(&mut self) -> Result<Position, DriverError> {
        loop {
            write!(self.output, "Enter your move (1-9): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                warn!("Input closed mid-game");
                return Err(DriverError::InputClosed);
            }

            match parse_move(&line, self.game.board()) {
                Ok(pos) => return Ok(pos),
                Err(e) => {
                    debug!(error = ?e, "Rejected input");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn render(&mut self) -> Result<(), DriverError> {
        writeln!(self.output, "\n{}\n", self.game.board().display())?;
        Ok(())
    }
}
