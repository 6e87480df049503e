//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};

/// Strictly Games - tic-tac-toe minimax player and classic search puzzles
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Minimax tic-tac-toe and classic search puzzles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "strictly_games.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe against the minimax AI
    Play {
        /// Let the human (O) move first
        #[arg(long)]
        human_first: bool,
    },

    /// Show the AI's move for a board, e.g. "XX.OO...."
    Analyze {
        /// Nine cells in row-major order: X, O, or . for empty
        board: String,

        /// Search every continuation instead of pruning
        #[arg(long)]
        no_pruning: bool,
    },

    /// Run hill climbing with random restarts on the 8-puzzle
    Puzzle {
        /// Number of random restarts
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Random blank moves used to scramble each start
        #[arg(long)]
        scramble_moves: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run hill climbing with random restarts on 8-queens
    Queens {
        /// Number of random restarts
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Solve missionaries and cannibals with breadth-first search
    River {
        /// Missionaries on the starting bank
        #[arg(long)]
        missionaries: Option<u8>,

        /// Cannibals on the starting bank
        #[arg(long)]
        cannibals: Option<u8>,

        /// Print the crossings as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_puzzle_flags() {
        let cli = Cli::parse_from(["strictly_games", "puzzle", "-i", "10", "--seed", "3", "--json"]);
        match cli.command {
            Command::Puzzle {
                iterations,
                seed,
                scramble_moves,
                json,
            } => {
                assert_eq!(iterations, Some(10));
                assert_eq!(seed, Some(3));
                assert_eq!(scramble_moves, None);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
