//! Error types for puzzle solving.

use thiserror::Error;

/// Reasons a search produces no path.
///
/// Input problems (`MalformedBoard`, `IdenticalStates`, `Unsolvable`) are
/// detected before any node store is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A board does not hold each tile `1..=8` once plus a single blank.
    #[error("malformed board: {reason}")]
    MalformedBoard { reason: String },

    /// Start and goal are the same arrangement; zero moves are needed.
    #[error("start and goal are identical")]
    IdenticalStates,

    /// Start and goal have different inversion parity.
    #[error("goal is unreachable from start (inversion parity differs)")]
    Unsolvable,

    /// Every frontier or candidate pool ran dry before the goal was reached.
    #[error("search exhausted after exploring {explored} boards without reaching the goal")]
    Exhausted { explored: usize },
}

impl SolveError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        SolveError::MalformedBoard {
            reason: reason.into(),
        }
    }
}

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, SolveError>;
