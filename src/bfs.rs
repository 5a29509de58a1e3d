//! Breadth-first search, from one end or from both ends at once.
//!
//! Both engines expand whole waves with [`expand`], so every board enters a
//! store at its minimal depth and the first wave that reaches the goal yields a
//! shortest path.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::board::Board;
use crate::error::{Result, SolveError};
use crate::expand::{expand, root_frontier, Frontier};
use crate::path::Path;
use crate::solvability::ensure_searchable;
use crate::store::{NodeIndex, NodeStore};
use crate::SearchOutcome;

/// Shortest paths from `start` to `goal`, expanding from `start` only.
pub fn search_bfs(start: &Board, goal: &Board) -> Result<Vec<Path>> {
    breadth_first(start, goal).map(|outcome| outcome.paths)
}

/// Shortest paths from `start` to `goal`, growing one tree from each end.
pub fn search_bidirectional_bfs(start: &Board, goal: &Board) -> Result<Vec<Path>> {
    bidirectional(start, goal).map(|outcome| outcome.paths)
}

/// Unidirectional search, also reporting how many boards were discovered.
pub fn breadth_first(start: &Board, goal: &Board) -> Result<SearchOutcome> {
    ensure_searchable(start, goal)?;

    let mut store = NodeStore::with_root(*start);
    let mut frontier = root_frontier(&store);
    let mut depth = 0usize;

    let hits = loop {
        frontier = expand(&mut store, &frontier);
        depth += 1;
        debug!(
            depth,
            frontier = frontier.len(),
            explored = store.len(),
            "bfs wave"
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
        paths = paths.len(),
        moves = depth,
        explored = store.len(),
        "bfs reached goal"
    );
    Ok(SearchOutcome {
        paths,
        explored: store.len(),
    })
}

/// Bidirectional search, also reporting how many boards both trees discovered.
///
/// The start side is expanded first, then the sides alternate one wave at a
/// time. After each wave the two current frontiers are compared; every equal
/// pair is a meeting point and yields one joined path.
pub fn bidirectional(start: &Board, goal: &Board) -> Result<SearchOutcome> {
    ensure_searchable(start, goal)?;

    let mut forward = NodeStore::with_root(*start);
    let mut backward = NodeStore::with_root(*goal);
    let forward_root = root_frontier(&forward);
    let mut forward_frontier = expand(&mut forward, &forward_root);
    let mut backward_frontier = root_frontier(&backward);
    let mut round = 1usize;

    let meetings = loop {
        let meetings = meeting_points(&forward_frontier, &backward_frontier);
        debug!(
            round,
            forward = forward_frontier.len(),
            backward = backward_frontier.len(),
            meetings = meetings.len(),
            "bidirectional round"
        );
        if !meetings.is_empty() {
            break meetings;
        }

        if round % 2 == 0 {
            forward_frontier = expand(&mut forward, &forward_frontier);
        } else {
            backward_frontier = expand(&mut backward, &backward_frontier);
        }
        round += 1;

        if forward_frontier.is_empty() || backward_frontier.is_empty() {
            return Err(SolveError::Exhausted {
                explored: forward.len() + backward.len(),
            });
        }
    };

    let paths: Vec<Path> = meetings
        .into_iter()
        .filter_map(|(forward_index, backward_index)| {
            let head = Path::reconstruct(&forward, forward_index)?;
            let tail = Path::reconstruct(&backward, backward_index)?;
            Some(Path::join(head, tail))
        })
        .collect();

    let explored = forward.len() + backward.len();
    info!(
        paths = paths.len(),
        moves = paths.first().map(Path::move_count),
        explored,
        "bidirectional search met"
    );
    Ok(SearchOutcome { paths, explored })
}

/// Every (start-side, goal-side) index pair whose boards are equal.
///
/// Pairs come out in start-side frontier order. A frontier never repeats a
/// board, so each start-side entry meets at most one goal-side entry.
fn meeting_points(forward: &Frontier, backward: &Frontier) -> Vec<(NodeIndex, NodeIndex)> {
    let backward_index: FxHashMap<&Board, NodeIndex> =
        backward.iter().map(|(index, board)| (board, *index)).collect();

    forward
        .iter()
        .filter_map(|(index, board)| backward_index.get(board).map(|&other| (*index, other)))
        .collect()
}
