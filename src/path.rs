//! Solution paths rebuilt from parent links.

use std::fmt;

use crate::board::{Board, Move};
use crate::store::{NodeIndex, NodeStore};

/// Boards from the start to the goal, both included.
///
/// A path of `n` boards describes `n - 1` slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    boards: Vec<Board>,
}

impl Path {
    /// Rebuilds the root-to-`index` path of `store`.
    ///
    /// Returns `None` if `index` is not in the store. Reconstructing the same
    /// index twice yields the same path.
    pub fn reconstruct(store: &NodeStore, index: NodeIndex) -> Option<Path> {
        let mut boards: Vec<Board> = store.trace(index).copied().collect();
        if boards.is_empty() {
            return None;
        }
        boards.reverse();
        Some(Path { boards })
    }

    /// Joins a start-rooted path with a goal-rooted path that end on the same board.
    ///
    /// The goal-side path is walked backwards and the shared meeting board appears once.
    pub fn join(forward: Path, backward: Path) -> Path {
        debug_assert_eq!(forward.boards.last(), backward.boards.last());

        let mut boards = forward.boards;
        boards.extend(backward.boards.into_iter().rev().skip(1));
        Path { boards }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn start(&self) -> &Board {
        &self.boards[0]
    }

    pub fn end(&self) -> &Board {
        &self.boards[self.boards.len() - 1]
    }

    /// Number of slides along the path.
    pub fn move_count(&self) -> usize {
        self.boards.len() - 1
    }

    /// The slide between each pair of consecutive boards.
    ///
    /// Returns `None` if two neighbours are not one legal slide apart.
    pub fn moves(&self) -> Option<Vec<Move>> {
        self.boards
            .windows(2)
            .map(|pair| pair[0].move_to(&pair[1]))
            .collect()
    }

    /// True when the path leads from `start` to `goal` by legal slides only.
    pub fn is_valid(&self, start: &Board, goal: &Board) -> bool {
        self.start() == start && self.end() == goal && self.moves().is_some()
    }
}

/// Renders every board of the path as a grid, one blank line apart.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (step, board) in self.boards.iter().enumerate() {
            if step > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            write!(f, "{board}")?;
        }
        Ok(())
    }
}

/// Formats a numbered list of paths with their move counts.
pub fn format_paths(paths: &[Path]) -> String {
    let mut output = String::new();
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("Path {}: {} moves\n", i + 1, path.move_count()));
        output.push_str(&path.to_string());
        output.push('\n');
    }
    output
}
