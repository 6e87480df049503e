//! Steepest-descent hill climbing with random restarts.
//!
//! A [`LocalSearch`] problem supplies costs, neighbors and random starting
//! states. [`hill_climb`] descends from one start until no neighbor is
//! strictly cheaper; [`run_experiment`] repeats that from fresh random
//! starts and records the best cost found so far after each restart.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Most restarts whose curve entries are reserved up front.
const RESERVED_RESTARTS: usize = 1 << 16;

/// A minimization problem over a discrete neighborhood.
pub trait LocalSearch {
    /// A candidate solution.
    type State: Clone + std::fmt::Debug;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Cost of a state; zero means solved.
    fn cost(&self, state: &Self::State) -> u32;

    /// States reachable in one step, in a fixed order.
    fn neighbors(&self, state: &Self::State) -> Vec<Self::State>;

    /// A fresh random starting state.
    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::State;
}

/// Where one descent ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Climb<S> {
    /// Cost of the final state.
    pub cost: u32,
    /// Final (locally optimal) state.
    pub state: S,
    /// Number of improving moves taken.
    pub steps: usize,
}

/// Descends from `initial` until no neighbor is strictly cheaper.
///
/// The cheapest neighbor is taken at each step; among equally cheap
/// neighbors the first one listed wins.
pub fn hill_climb<P: LocalSearch>(problem: &P, initial: P::State) -> Climb<P::State> {
    let mut current = initial;
    let mut current_cost = problem.cost(&current);
    let mut steps = 0;

    loop {
        let mut best: Option<(u32, P::State)> = None;
        for neighbor in problem.neighbors(&current) {
            let cost = problem.cost(&neighbor);
            let bar = best.as_ref().map_or(current_cost, |(c, _)| *c);
            if cost < bar {
                best = Some((cost, neighbor));
            }
        }

        match best {
            Some((cost, state)) => {
                current = state;
                current_cost = cost;
                steps += 1;
            }
            None => break,
        }
    }

    Climb {
        cost: current_cost,
        state: current,
        steps,
    }
}

/// Outcome of repeated random-restart climbs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Problem name.
    pub problem: String,
    /// Number of restarts performed.
    pub iterations: usize,
    /// Best cost seen so far, after each restart.
    pub best_costs: Vec<u32>,
    /// Restarts whose climb reached cost zero.
    pub solved: usize,
}

impl ExperimentReport {
    /// Lowest cost reached over the whole run.
    pub fn best(&self) -> Option<u32> {
        self.best_costs.last().copied()
    }
}

/// Runs `iterations` independent climbs from random starts.
#[instrument(skip(problem, rng), fields(problem = problem.name()))]
pub fn run_experiment<P, R>(problem: &P, iterations: usize, rng: &mut R) -> ExperimentReport
where
    P: LocalSearch,
    R: Rng + ?Sized,
{
    let mut best_costs = Vec::with_capacity(curve_capacity(iterations));
    let mut best_so_far = u32::MAX;
    let mut solved = 0;

    for iteration in 0..iterations {
        let climb = hill_climb(problem, problem.random_state(rng));
        if climb.cost == 0 {
            solved += 1;
        }
        if climb.cost < best_so_far {
            debug!(iteration, cost = climb.cost, steps = climb.steps, "New best cost");
            best_so_far = climb.cost;
        }
        best_costs.push(best_so_far);
    }

    info!(iterations, solved, best = ?best_costs.last(), "Experiment finished");
    ExperimentReport {
        problem: problem.name().to_string(),
        iterations,
        best_costs,
        solved,
    }
}

fn curve_capacity(iterations: usize) -> usize {
    iterations.min(RESERVED_RESTARTS)
}
