//! Reachability test based on inversion parity.
//!
//! A slide never changes the parity of the inversion count of the eight tiles
//! read in slot order (horizontal slides keep the order, vertical slides move one
//! tile past two others). On a 3x3 board the parity classes are exactly the two
//! connected components of the state graph.

use crate::board::Board;
use crate::error::{Result, SolveError};

/// Counts pairs of tiles that appear in decreasing label order, ignoring the blank.
pub fn inversions(board: &Board) -> usize {
    let tiles: Vec<u8> = board.tiles().collect();
    tiles
        .iter()
        .enumerate()
        .map(|(i, &label)| tiles[i + 1..].iter().filter(|&&later| later < label).count())
        .sum()
}

/// Returns true when `goal` can be reached from `start`.
pub fn is_solvable(start: &Board, goal: &Board) -> bool {
    inversions(start) % 2 == inversions(goal) % 2
}

/// Rejects a start/goal pair that must not be searched.
///
/// Identical boards are reported before parity is looked at.
pub fn ensure_searchable(start: &Board, goal: &Board) -> Result<()> {
    if start == goal {
        return Err(SolveError::IdenticalStates);
    }
    if !is_solvable(start, goal) {
        return Err(SolveError::Unsolvable);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(slots: [u8; 9]) -> Board {
        Board::new(slots).unwrap()
    }

    #[test]
    fn test_inversion_count() {
        assert_eq!(inversions(&board([1, 2, 3, 4, 5, 6, 7, 8, 0])), 0);
        assert_eq!(inversions(&board([2, 8, 3, 1, 0, 4, 7, 6, 5])), 11);
        assert_eq!(inversions(&board([1, 6, 2, 0, 3, 4, 8, 7, 5])), 7);
        assert_eq!(inversions(&board([0, 8, 7, 6, 5, 4, 3, 2, 1])), 28);
    }

    #[test]
    fn test_blank_position_does_not_matter() {
        let a = board([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let b = board([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(inversions(&a), inversions(&b));
    }

    #[test]
    fn test_board_is_solvable_from_itself() {
        let b = board([2, 8, 3, 1, 0, 4, 7, 6, 5]);
        assert!(is_solvable(&b, &b));
    }

    #[test]
    fn test_swapped_tiles_are_unsolvable() {
        let goal = board([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let swapped = board([2, 1, 3, 4, 5, 6, 7, 8, 0]);
        assert!(!is_solvable(&swapped, &goal));
        assert!(!is_solvable(&goal, &swapped));
    }

    #[test]
    fn test_moves_preserve_parity() {
        let start = board([2, 8, 3, 1, 0, 4, 7, 6, 5]);
        for (_, next) in start.successors() {
            assert!(is_solvable(&start, &next), "{next:?} should share parity");
            for (_, after) in next.successors() {
                assert!(is_solvable(&start, &after));
            }
        }
    }

    #[test]
    fn test_ensure_searchable_ordering() {
        let goal = board([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let swapped = board([2, 1, 3, 4, 5, 6, 7, 8, 0]);
        let near = board([1, 2, 3, 4, 5, 6, 7, 0, 8]);

        assert_eq!(ensure_searchable(&goal, &goal), Err(SolveError::IdenticalStates));
        assert_eq!(ensure_searchable(&swapped, &goal), Err(SolveError::Unsolvable));
        assert_eq!(ensure_searchable(&near, &goal), Ok(()));
    }

    #[test]
    fn test_reference_pair_is_solvable() {
        let start = board([2, 8, 3, 1, 0, 4, 7, 6, 5]);
        let goal = board([1, 6, 2, 0, 3, 4, 8, 7, 5]);
        assert!(is_solvable(&start, &goal));
    }
}
