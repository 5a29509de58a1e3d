//! Iterative-deepening search guided by the Manhattan heuristic.
//!
//! Each round builds the pool of unseen successors of the current frontier,
//! scores every candidate against the goal, and lets an [`AdmissionPolicy`]
//! choose which of them enter the store and form the next frontier. Rejected
//! candidates are simply dropped; they can be generated again later from
//! another parent because they never reached the store.

use tracing::{debug, info};

use crate::board::Board;
use crate::error::{Result, SolveError};
use crate::expand::{candidates, root_frontier, Candidate, Frontier};
use crate::heuristic::manhattan;
use crate::path::Path;
use crate::solvability::ensure_searchable;
use crate::store::{NodeIndex, NodeStore};
use crate::SearchOutcome;

/// How far the threshold is relaxed when a round admits nothing.
///
/// One slide changes the Manhattan distance by exactly one, so scores within a
/// round share parity and a step of one would always come up empty.
pub const THRESHOLD_STEP: u32 = 2;

/// Rule for picking which scored candidates join the next frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionPolicy {
    /// Admit every candidate scoring strictly below the threshold.
    ///
    /// If none qualifies the threshold is raised by [`THRESHOLD_STEP`] and the
    /// same pool is scanned again. The raised value only applies to that round.
    /// Paths are shortest only when `limit` exceeds every candidate's score, at
    /// which point every candidate is admitted as in breadth-first search.
    Threshold { limit: u32 },
    /// Admit the `limit` best-scoring candidates, ties kept in generation order.
    ///
    /// A beam restriction: the frontier stays small but the path found is not
    /// necessarily the shortest.
    BoundedBest { limit: usize },
}

impl AdmissionPolicy {
    /// Maps the boolean policy switch onto a policy: `true` selects
    /// [`Threshold`](Self::Threshold), `false` selects [`BoundedBest`](Self::BoundedBest).
    pub fn from_flag(use_threshold_policy: bool, limit: u32) -> Self {
        if use_threshold_policy {
            AdmissionPolicy::Threshold { limit }
        } else {
            AdmissionPolicy::BoundedBest {
                limit: limit as usize,
            }
        }
    }
}

/// A candidate together with its heuristic distance to the goal.
#[derive(Debug, Clone, Copy)]
struct Scored {
    candidate: Candidate,
    score: u32,
}

/// Heuristic search from `start` to `goal`.
///
/// `use_threshold_policy` picks between [`AdmissionPolicy::Threshold`] and
/// [`AdmissionPolicy::BoundedBest`]; `limit` is the threshold or the beam width.
pub fn search_ida_star(
    start: &Board,
    goal: &Board,
    use_threshold_policy: bool,
    limit: u32,
) -> Result<Vec<Path>> {
    let policy = AdmissionPolicy::from_flag(use_threshold_policy, limit);
    iterative_deepening(start, goal, policy).map(|outcome| outcome.paths)
}

/// Heuristic search with an explicit policy, also reporting how many boards
/// entered the store.
///
/// Fails with [`SolveError::Exhausted`] when a round has no candidates left or
/// admits none, which happens when the policy pruned every route to the goal.
pub fn iterative_deepening(
    start: &Board,
    goal: &Board,
    policy: AdmissionPolicy,
) -> Result<SearchOutcome> {
    ensure_searchable(start, goal)?;

    let mut store = NodeStore::with_root(*start);
    let mut frontier = root_frontier(&store);
    let mut round = 0usize;

    let hits = loop {
        round += 1;

        let pool: Vec<Scored> = candidates(&store, &frontier)
            .into_iter()
            .map(|candidate| Scored {
                score: manhattan(&candidate.board, goal),
                candidate,
            })
            .collect();
        if pool.is_empty() {
            return Err(SolveError::Exhausted {
                explored: store.len(),
            });
        }

        frontier = match policy {
            AdmissionPolicy::Threshold { limit } => admit_below_threshold(&mut store, &pool, limit),
            AdmissionPolicy::BoundedBest { limit } => admit_best(&mut store, pool, limit),
        };
        debug!(
            round,
            frontier = frontier.len(),
            explored = store.len(),
            "ida round"
        );

        let hits: Vec<NodeIndex> = frontier
            .iter()
            .filter(|(_, board)| board == goal)
            .map(|&(index, _)| index)
            .collect();
        if !hits.is_empty() {
            break hits;
        }
        if frontier.is_empty() {
            return Err(SolveError::Exhausted {
                explored: store.len(),
            });
        }
    };

    let paths: Vec<Path> = hits
        .into_iter()
        .filter_map(|index| Path::reconstruct(&store, index))
        .collect();

    info!(
        ?policy,
        paths = paths.len(),
        moves = paths.first().map(Path::move_count),
        rounds = round,
        explored = store.len(),
        "ida reached goal"
    );
    Ok(SearchOutcome {
        paths,
        explored: store.len(),
    })
}

/// Admits candidates scoring below `limit`, relaxing a local copy of the
/// threshold until at least one is admitted.
///
/// `pool` must be non-empty and free of boards already in `store`, so the
/// first candidate under the threshold is always insertable.
fn admit_below_threshold(store: &mut NodeStore, pool: &[Scored], limit: u32) -> Frontier {
    let mut threshold = limit;
    loop {
        let admitted = admit(store, pool.iter().filter(|scored| scored.score < threshold));
        if !admitted.is_empty() {
            return admitted;
        }
        threshold += THRESHOLD_STEP;
        debug!(threshold, "nothing admitted, relaxing threshold");
    }
}

/// Admits the `limit` lowest-scoring candidates.
fn admit_best(store: &mut NodeStore, mut pool: Vec<Scored>, limit: usize) -> Frontier {
    // stable: equal scores keep generation order
    pool.sort_by_key(|scored| scored.score);
    admit(store, pool.iter().take(limit))
}

/// Inserts the chosen candidates, skipping boards the store already holds.
fn admit<'a>(store: &mut NodeStore, chosen: impl Iterator<Item = &'a Scored>) -> Frontier {
    chosen
        .filter_map(|scored| {
            let Candidate { parent, board } = scored.candidate;
            store.insert_new(parent, board).map(|index| (index, board))
        })
        .collect()
}
