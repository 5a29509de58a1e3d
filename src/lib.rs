//! Eight-Puzzle Solver Library
//!
//! State-space search for the 3x3 sliding puzzle: given a start and a goal
//! arrangement, find the slides that turn one into the other.
//!
//! Three engines share one node arena and one frontier expander:
//! - [`search_bfs`]: breadth-first from the start, shortest paths.
//! - [`search_bidirectional_bfs`]: breadth-first from both ends, shortest paths.
//! - [`search_ida_star`]: heuristic-bounded rounds with a threshold or a beam policy.
//!
//! Every engine checks [`is_solvable`] and rejects identical boards before it
//! builds a store.

pub mod bfs;
pub mod board;
pub mod error;
pub mod expand;
pub mod heuristic;
pub mod ida;
pub mod path;
pub mod solvability;
pub mod store;

pub use bfs::{search_bfs, search_bidirectional_bfs};
pub use board::{Board, Move};
pub use error::SolveError;
pub use ida::{search_ida_star, AdmissionPolicy};
pub use path::Path;
pub use solvability::is_solvable;

/// Paths found by one search run plus the size of the store(s) it built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Root-to-goal paths, one per goal hit or meeting point. Never empty.
    pub paths: Vec<Path>,
    /// Boards recorded across every store the run owned.
    pub explored: usize,
}

/// A search engine together with its parameters.
///
/// Lets callers pick an engine at runtime without naming the engine functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BreadthFirst,
    Bidirectional,
    IterativeDeepening(AdmissionPolicy),
}

impl Strategy {
    /// Runs this strategy from `start` to `goal`.
    pub fn solve(&self, start: &Board, goal: &Board) -> error::Result<SearchOutcome> {
        match *self {
            Strategy::BreadthFirst => bfs::breadth_first(start, goal),
            Strategy::Bidirectional => bfs::bidirectional(start, goal),
            Strategy::IterativeDeepening(policy) => ida::iterative_deepening(start, goal, policy),
        }
    }

    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::Bidirectional => "bidirectional breadth-first",
            Strategy::IterativeDeepening(AdmissionPolicy::Threshold { .. }) => {
                "iterative deepening (threshold)"
            }
            Strategy::IterativeDeepening(AdmissionPolicy::BoundedBest { .. }) => {
                "iterative deepening (bounded best)"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_strategy_solves_reference_pair() {
        let start: Board = "2 8 3 1 _ 4 7 6 5".parse().unwrap();
        let goal: Board = "1 6 2 _ 3 4 8 7 5".parse().unwrap();

        let strategies = [
            Strategy::BreadthFirst,
            Strategy::Bidirectional,
            Strategy::IterativeDeepening(AdmissionPolicy::Threshold { limit: 10 }),
            Strategy::IterativeDeepening(AdmissionPolicy::BoundedBest { limit: 10 }),
        ];
        for strategy in strategies {
            let outcome = strategy.solve(&start, &goal).unwrap();
            assert!(!outcome.paths.is_empty(), "{}", strategy.name());
            for path in &outcome.paths {
                assert!(path.is_valid(&start, &goal), "{}", strategy.name());
                assert_eq!(path.move_count(), 15, "{}", strategy.name());
            }
            assert!(outcome.explored > 1);
        }
    }

    #[test]
    fn test_errors_are_distinct() {
        let goal: Board = "123456780".parse().unwrap();
        let swapped: Board = "213456780".parse().unwrap();

        assert_eq!(
            Strategy::BreadthFirst.solve(&goal, &goal),
            Err(SolveError::IdenticalStates)
        );
        assert_eq!(
            Strategy::Bidirectional.solve(&swapped, &goal),
            Err(SolveError::Unsolvable)
        );
        assert_ne!(SolveError::IdenticalStates, SolveError::Unsolvable);
    }
}
