//! Missionaries and cannibals, solved by breadth-first search.
//!
//! States count the people still on the starting bank and record which bank
//! the boat is on. The boat carries one or two people. On neither bank may
//! missionaries be outnumbered by cannibals while any missionary is there.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{debug, info, instrument};

/// Boat loads (missionaries, cannibals), in the order they are tried.
const LOADS: [(u8, u8); 5] = [(1, 0), (2, 0), (1, 1), (0, 1), (0, 2)];

/// A river bank.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bank {
    /// Where everyone begins.
    Start,
    /// Where everyone must end up.
    Goal,
}

impl Bank {
    /// The other bank.
    pub fn opposite(self) -> Self {
        match self {
            Bank::Start => Bank::Goal,
            Bank::Goal => Bank::Start,
        }
    }
}

/// People on the starting bank and the boat's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiverState {
    /// Missionaries on the starting bank.
    pub missionaries: u8,
    /// Cannibals on the starting bank.
    pub cannibals: u8,
    /// Bank the boat is at.
    pub boat: Bank,
}

/// One boat trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crossing {
    /// Missionaries in the boat.
    pub missionaries: u8,
    /// Cannibals in the boat.
    pub cannibals: u8,
    /// Bank the boat arrives at.
    pub to: Bank,
}

impl std::fmt::Display for Crossing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = match self.to {
            Bank::Goal => "→",
            Bank::Start => "←",
        };
        write!(f, "({}, {}, {})", self.missionaries, self.cannibals, arrow)
    }
}

/// A missionaries-and-cannibals instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiverPuzzle {
    missionaries: u8,
    cannibals: u8,
}

impl RiverPuzzle {
    /// Creates an instance with the given head counts.
    pub fn new(missionaries: u8, cannibals: u8) -> Self {
        Self {
            missionaries,
            cannibals,
        }
    }

    /// Everyone and the boat on the starting bank.
    pub fn start(&self) -> RiverState {
        RiverState {
            missionaries: self.missionaries,
            cannibals: self.cannibals,
            boat: Bank::Start,
        }
    }

    /// Everyone and the boat on the goal bank.
    pub fn is_goal(&self, state: &RiverState) -> bool {
        state.missionaries == 0 && state.cannibals == 0 && state.boat == Bank::Goal
    }

    /// Checks head counts and that no bank's missionaries are outnumbered.
    pub fn is_valid(&self, state: &RiverState) -> bool {
        if state.missionaries > self.missionaries || state.cannibals > self.cannibals {
            return false;
        }
        let safe = |m: u8, c: u8| m == 0 || m >= c;
        safe(state.missionaries, state.cannibals)
            && safe(
                self.missionaries - state.missionaries,
                self.cannibals - state.cannibals,
            )
    }

    /// Moves the boat with a load; `None` if the result is not a valid state.
    pub fn apply(&self, state: &RiverState, crossing: &Crossing) -> Option<RiverState> {
        if crossing.to == state.boat {
            return None;
        }
        let (missionaries, cannibals) = match state.boat {
            Bank::Start => (
                state.missionaries.checked_sub(crossing.missionaries)?,
                state.cannibals.checked_sub(crossing.cannibals)?,
            ),
            Bank::Goal => (
                state.missionaries.checked_add(crossing.missionaries)?,
                state.cannibals.checked_add(crossing.cannibals)?,
            ),
        };
        let next = RiverState {
            missionaries,
            cannibals,
            boat: crossing.to,
        };
        self.is_valid(&next).then_some(next)
    }

    /// Valid crossings from `state` and where they lead.
    pub fn successors(&self, state: &RiverState) -> Vec<(Crossing, RiverState)> {
        LOADS
            .iter()
            .filter_map(|&(missionaries, cannibals)| {
                let crossing = Crossing {
                    missionaries,
                    cannibals,
                    to: state.boat.opposite(),
                };
                self.apply(state, &crossing).map(|next| (crossing, next))
            })
            .collect()
    }

    /// Shortest sequence of crossings from start to goal.
    ///
    /// Returns `None` when the starting position is already invalid or the
    /// goal is unreachable.
    #[instrument(skip(self), fields(missionaries = self.missionaries, cannibals = self.cannibals))]
    pub fn solve(&self) -> Option<Vec<Crossing>> {
        let start = self.start();
        if !self.is_valid(&start) {
            debug!("Starting bank is already unsafe");
            return None;
        }

        let mut queue = VecDeque::from([start]);
        let mut visited = HashSet::from([start]);
        let mut parents: HashMap<RiverState, (RiverState, Crossing)> = HashMap::new();

        while let Some(state) = queue.pop_front() {
            if self.is_goal(&state) {
                let path = Self::trace_back(&parents, state);
                info!(crossings = path.len(), explored = visited.len(), "Solution found");
                return Some(path);
            }

            for (crossing, next) in self.successors(&state) {
                if visited.insert(next) {
                    parents.insert(next, (state, crossing));
                    queue.push_back(next);
                }
            }
        }

        info!(explored = visited.len(), "No solution");
        None
    }

    /// Follows parent links from `goal` back to the start.
    fn trace_back(
        parents: &HashMap<RiverState, (RiverState, Crossing)>,
        goal: RiverState,
    ) -> Vec<Crossing> {
        let mut path = Vec::new();
        let mut state = goal;
        while let Some(&(previous, crossing)) = parents.get(&state) {
            path.push(crossing);
            state = previous;
        }
        path.reverse();
        path
    }
}

impl Default for RiverPuzzle {
    fn default() -> Self {
        Self::new(3, 3)
    }
}
