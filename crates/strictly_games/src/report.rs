//! Plain-text rendering of solver results.

use std::fmt;
use strictly_puzzles::{Crossing, ExperimentReport};
use strictly_tictactoe::{Board, Decision};

/// Summarizes an experiment and lists the restarts where the best cost improved.
pub fn render_experiment(report: &ExperimentReport) -> String {
    ExperimentTable(report).to_string()
}

/// Numbered list of crossings, or a note that none exists.
pub fn render_crossings(path: Option<&[Crossing]>) -> String {
    match path {
        Some(path) => CrossingList(path).to_string(),
        None => "No solution\n".to_string(),
    }
}

struct ExperimentTable<'a>(&'a ExperimentReport);

impl fmt::Display for ExperimentTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "{}: hill climbing with random restarts", report.problem)?;
        write!(f, "iterations: {}  solved: {}  best cost: ", report.iterations, report.solved)?;
        match report.best() {
            Some(cost) => writeln!(f, "{}", cost)?,
            None => writeln!(f, "n/a")?,
        }
        writeln!(f, "{:>9}  {:>9}", "iteration", "best cost")?;

        let mut previous = None;
        for (iteration, &cost) in report.best_costs.iter().enumerate() {
            if previous != Some(cost) {
                writeln!(f, "{:>9}  {:>9}", iteration, cost)?;
                previous = Some(cost);
            }
        }
        Ok(())
    }
}

struct CrossingList<'a>(&'a [Crossing]);

impl fmt::Display for CrossingList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Optimal path (M, C, direction), {} crossings:",
            self.0.len()
        )?;
        for (step, crossing) in self.0.iter().enumerate() {
            writeln!(f, "{:>3}. {}", step + 1, crossing)?;
        }
        Ok(())
    }
}

/// Board, chosen square and score.
pub fn render_decision(board: &Board, decision: &Decision) -> String {
    format!(
        "{}\n\nbest move: {} ({})\nscore: {}\nnodes: {}\n",
        board.display(),
        decision.position.to_number(),
        decision.position,
        decision.score,
        decision.nodes
    )
}
