//! Strictly Games - Unified CLI
//!
//! Minimax tic-tac-toe and classic search puzzles.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use strictly_games::{
    AppConfig, Cli, Command, FirstMove, Match, render_crossings, render_decision,
    render_experiment,
};
use strictly_puzzles::{EightPuzzle, EightQueens, ExperimentReport, RiverPuzzle, run_experiment};
use strictly_tictactoe::{Board, Pruning, SearchEngine};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    initialize_tracing(config.log_filter());

    match cli.command {
        Command::Play { human_first } => run_play(human_first || *config.human_first()),
        Command::Analyze { board, no_pruning } => run_analyze(&board, no_pruning),
        Command::Puzzle {
            iterations,
            seed,
            scramble_moves,
            json,
        } => {
            let problem = EightPuzzle::new(scramble_moves.unwrap_or(*config.scramble_moves()));
            let mut rng = make_rng(seed.or(*config.seed()));
            let iterations = iterations.unwrap_or(*config.iterations());
            print_experiment(&run_experiment(&problem, iterations, &mut rng), json)
        }
        Command::Queens {
            iterations,
            seed,
            json,
        } => {
            let mut rng = make_rng(seed.or(*config.seed()));
            let iterations = iterations.unwrap_or(*config.iterations());
            print_experiment(&run_experiment(&EightQueens, iterations, &mut rng), json)
        }
        Command::River {
            missionaries,
            cannibals,
            json,
        } => run_river(
            missionaries.unwrap_or(*config.missionaries()),
            cannibals.unwrap_or(*config.cannibals()),
            json,
        ),
    }
}

/// Play one interactive game on stdin/stdout
#[instrument]
fn run_play(human_first: bool) -> Result<()> {
    let first = if human_first {
        FirstMove::Human
    } else {
        FirstMove::Ai
    };
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = Match::new(stdin.lock(), stdout.lock(), SearchEngine::default(), first);
    game.play().context("Game aborted")?;
    Ok(())
}

/// Print the AI's decision for a board
#[instrument]
fn run_analyze(board: &str, no_pruning: bool) -> Result<()> {
    let mut board: Board = board.parse().context("Invalid board")?;
    let pruning = if no_pruning {
        Pruning::Disabled
    } else {
        Pruning::AlphaBeta
    };
    let decision = SearchEngine::new(pruning)
        .decide(&mut board)
        .context("No move to analyze")?;
    print!("{}", render_decision(&board, &decision));
    Ok(())
}

/// Solve the river crossing and print the crossings
#[instrument]
fn run_river(missionaries: u8, cannibals: u8, json: bool) -> Result<()> {
    let solution = RiverPuzzle::new(missionaries, cannibals).solve();
    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        print!("{}", render_crossings(solution.as_deref()));
    }
    Ok(())
}

fn print_experiment(report: &ExperimentReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_experiment(report));
    }
    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!(seed, "Using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
