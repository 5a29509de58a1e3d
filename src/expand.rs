//! Frontier expansion shared by every search engine.

use crate::board::Board;
use crate::store::{NodeIndex, NodeStore, ROOT};

/// Nodes discovered in the latest wave and not yet expanded, in discovery order.
pub type Frontier = Vec<(NodeIndex, Board)>;

/// An unseen successor that has not been admitted into a store yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Frontier node the candidate was generated from.
    pub parent: NodeIndex,
    pub board: Board,
}

/// The single-node frontier of a freshly created store.
pub fn root_frontier(store: &NodeStore) -> Frontier {
    store
        .get(ROOT)
        .map(|node| vec![(ROOT, node.board)])
        .unwrap_or_default()
}

/// Generates every unseen successor of the frontier and records it in `store`.
///
/// Returns the newly discovered nodes, which form the next breadth-first wave.
/// A board reachable from two frontier members is kept only under the first.
pub fn expand(store: &mut NodeStore, frontier: &[(NodeIndex, Board)]) -> Frontier {
    let mut next = Vec::with_capacity(frontier.len() * 2);

    for &(parent, board) in frontier {
        for (_, successor) in board.successors() {
            if let Some(index) = store.insert_new(parent, successor) {
                next.push((index, successor));
            }
        }
    }

    next
}

/// Generates the unseen successors of the frontier without touching `store`.
///
/// Unlike [`expand`], the pool may list the same board twice when two frontier
/// members share a neighbour; admission resolves that against the store.
pub fn candidates(store: &NodeStore, frontier: &[(NodeIndex, Board)]) -> Vec<Candidate> {
    frontier
        .iter()
        .flat_map(move |&(parent, board)| {
            board
                .successors()
                .filter(move |(_, successor)| !store.contains(successor))
                .map(move |(_, successor)| Candidate {
                    parent,
                    board: successor,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    fn board(slots: [u8; 9]) -> Board {
        Board::new(slots).unwrap()
    }

    #[test]
    fn test_first_wave_is_root_successors() {
        let root = board([2, 8, 3, 1, 0, 4, 7, 6, 5]);
        let mut store = NodeStore::with_root(root);

        let root_wave = root_frontier(&store);
        let wave = expand(&mut store, &root_wave);

        let expected: Vec<(NodeIndex, Board)> = root
            .successors()
            .enumerate()
            .map(|(offset, (_, b))| (ROOT + 1 + offset, b))
            .collect();
        assert_eq!(wave, expected);
        for &(index, _) in &wave {
            assert_eq!(store.get(index).unwrap().parent, Some(ROOT));
        }
    }

    #[test]
    fn test_second_wave_never_revisits() {
        let root = board([2, 8, 3, 1, 0, 4, 7, 6, 5]);
        let mut store = NodeStore::with_root(root);

        let root_wave = root_frontier(&store);
        let first = expand(&mut store, &root_wave);
        let second = expand(&mut store, &first);

        // each of the four first-wave boards has its way back to the root blocked
        assert!(second.iter().all(|(_, b)| *b != root));
        assert!(second
            .iter()
            .all(|(_, b)| !first.iter().any(|(_, f)| f == b)));
        assert_eq!(store.len(), 1 + first.len() + second.len());
    }

    #[test]
    fn test_board_reached_twice_in_one_wave_is_recorded_once() {
        let root = board([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let mut store = NodeStore::with_root(root);

        let wave = expand(&mut store, &[(ROOT, root), (ROOT, root)]);

        assert_eq!(wave.len(), 2);
        assert_eq!(wave[0].1, root.apply(Move::Down).unwrap());
        assert_eq!(wave[1].1, root.apply(Move::Right).unwrap());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_candidates_leave_store_untouched() {
        let root = board([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let mut store = NodeStore::with_root(root);
        let root_wave = root_frontier(&store);
        let first = expand(&mut store, &root_wave);
        let len_before = store.len();

        let pool = candidates(&store, &first);

        assert_eq!(store.len(), len_before);
        assert!(pool.iter().all(|c| !store.contains(&c.board)));
        assert!(pool
            .iter()
            .all(|c| first.iter().any(|&(index, _)| index == c.parent)));
    }

    #[test]
    fn test_candidates_may_repeat_a_board() {
        let root = board([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let mut store = NodeStore::with_root(root);
        let child = root.apply(Move::Up).unwrap();
        let child_index = store.insert(ROOT, child);

        let pool = candidates(&store, &[(child_index, child), (child_index, child)]);

        // Up and Left from the child, listed once per frontier entry
        assert_eq!(pool.len(), 4);
        assert_eq!(pool[0], pool[2]);
        assert_eq!(pool[1], pool[3]);
        assert_eq!(store.len(), 2);
    }
}
