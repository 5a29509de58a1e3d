//! Append-only node arena for one search run.
//!
//! Nodes are addressed by a 1-based [`NodeIndex`] and refer to their parent by
//! index only, so the search tree never holds references into itself. A
//! content-keyed `FxHashMap` makes the duplicate check O(1).

use rustc_hash::FxHashMap;

use crate::board::Board;

/// Position of a node in its store. The root is always [`ROOT`].
pub type NodeIndex = usize;

/// Index of the first node inserted into every store.
pub const ROOT: NodeIndex = 1;

/// A discovered board and the node that discovered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// `None` only for the root.
    pub parent: Option<NodeIndex>,
    pub board: Board,
}

/// Indexed, duplicate-free record of every board a search has discovered.
///
/// No two indices map to equal boards. Each search run owns its own store,
/// so index allocation always starts again at [`ROOT`].
#[derive(Debug, Clone)]
pub struct NodeStore {
    nodes: Vec<Node>,
    seen: FxHashMap<Board, NodeIndex>,
}

impl NodeStore {
    /// Creates a store holding `root` as node [`ROOT`].
    pub fn with_root(root: Board) -> Self {
        let mut seen = FxHashMap::default();
        seen.insert(root, ROOT);
        Self {
            nodes: vec![Node {
                parent: None,
                board: root,
            }],
            seen,
        }
    }

    /// Returns true if some node already holds `board`.
    #[inline]
    pub fn contains(&self, board: &Board) -> bool {
        self.seen.contains_key(board)
    }

    /// Index of the node holding `board`, if any.
    #[inline]
    pub fn index_of(&self, board: &Board) -> Option<NodeIndex> {
        self.seen.get(board).copied()
    }

    /// Records `board` as a child of `parent` and returns its new index.
    ///
    /// Callers must check [`contains`](Self::contains) first; see
    /// [`insert_new`](Self::insert_new) for the combined form.
    pub fn insert(&mut self, parent: NodeIndex, board: Board) -> NodeIndex {
        debug_assert!(
            self.get(parent).is_some(),
            "parent {parent} is not in the store"
        );
        debug_assert!(!self.contains(&board), "duplicate board {board:?}");

        self.nodes.push(Node {
            parent: Some(parent),
            board,
        });
        let index = self.nodes.len();
        self.seen.insert(board, index);
        index
    }

    /// Inserts `board` under `parent` unless it is already known.
    ///
    /// Returns the new index, or `None` when the board was a duplicate.
    #[inline]
    pub fn insert_new(&mut self, parent: NodeIndex, board: Board) -> Option<NodeIndex> {
        if self.contains(&board) {
            None
        } else {
            Some(self.insert(parent, board))
        }
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        index.checked_sub(1).and_then(|slot| self.nodes.get(slot))
    }

    /// Number of nodes discovered so far, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A store always holds its root, so this is never true.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks parent links from `index` up to the root, yielding each board.
    ///
    /// The first item is the board at `index`, the last is the root board. An
    /// unknown index yields nothing.
    pub fn trace(&self, index: NodeIndex) -> Trace<'_> {
        Trace {
            store: self,
            next: Some(index),
        }
    }
}

/// Leaf-to-root iterator returned by [`NodeStore::trace`].
pub struct Trace<'a> {
    store: &'a NodeStore,
    next: Option<NodeIndex>,
}

impl<'a> Iterator for Trace<'a> {
    type Item = &'a Board;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.store.get(self.next?)?;
        self.next = node.parent;
        Some(&node.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(slots: [u8; 9]) -> Board {
        Board::new(slots).unwrap()
    }

    #[test]
    fn test_root_is_index_one() {
        let root = board([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let store = NodeStore::with_root(root);

        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert_eq!(store.index_of(&root), Some(ROOT));
        assert_eq!(store.get(ROOT).unwrap().parent, None);
        assert!(store.get(0).is_none());
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_indices_increase_in_insertion_order() {
        let root = board([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let mut store = NodeStore::with_root(root);

        let children: Vec<Board> = root.successors().map(|(_, b)| b).collect();
        for (offset, &child) in children.iter().enumerate() {
            assert_eq!(store.insert(ROOT, child), ROOT + 1 + offset);
        }
        assert_eq!(store.len(), 1 + children.len());
        for &child in &children {
            assert!(store.contains(&child));
        }
    }

    #[test]
    fn test_insert_new_suppresses_duplicates() {
        let root = board([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let mut store = NodeStore::with_root(root);
        let (_, child) = root.successors().next().unwrap();

        assert_eq!(store.insert_new(ROOT, child), Some(2));
        assert_eq!(store.insert_new(ROOT, child), None);
        assert_eq!(store.insert_new(2, root), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_trace_walks_to_root() {
        let root = board([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let mut store = NodeStore::with_root(root);
        let first = root.apply(crate::board::Move::Up).unwrap();
        let second = first.apply(crate::board::Move::Left).unwrap();
        let first_index = store.insert(ROOT, first);
        let second_index = store.insert(first_index, second);

        let trail: Vec<Board> = store.trace(second_index).copied().collect();
        assert_eq!(trail, vec![second, first, root]);

        // repeated walks from the same index agree
        let again: Vec<Board> = store.trace(second_index).copied().collect();
        assert_eq!(trail, again);

        assert_eq!(store.trace(99).count(), 0);
    }
}
