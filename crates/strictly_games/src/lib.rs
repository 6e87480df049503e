//! Strictly Games library - command-line front end pieces
//!
//! # Architecture
//!
//! - **Cli**: clap definitions for the `strictly_games` binary
//! - **Config**: optional TOML settings overridden by flags
//! - **Driver**: a human-vs-AI tic-tac-toe match over text streams
//! - **Report**: plain-text rendering of solver results
//!
//! Game logic lives in `strictly_tictactoe`; the puzzles in `strictly_puzzles`.

#![warn(missing_docs)]

mod cli;
mod config;
mod driver;
mod report;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use driver::{DriverError, FirstMove, InputError, Match, parse_move};
pub use report::{render_crossings, render_decision, render_experiment};
