//! Manhattan-distance heuristic.
//!
//! The per-position distances are fixed for a 3x3 grid, so they are computed
//! once at compile time into [`DISTANCE_TABLE`].

use crate::board::{idx_to_coord, Board, CELLS, TILE_COUNT};

/// Builds the pairwise grid distance table at compile time.
///
/// `table[i][j]` is the number of orthogonal steps between slot `i` and slot `j`.
const fn build_distance_table() -> [[u8; CELLS]; CELLS] {
    let mut table = [[0u8; CELLS]; CELLS];

    let mut from = 0;
    while from < CELLS {
        let (from_row, from_col) = idx_to_coord(from);
        let mut to = 0;
        while to < CELLS {
            let (to_row, to_col) = idx_to_coord(to);
            table[from][to] = (from_row.abs_diff(to_row) + from_col.abs_diff(to_col)) as u8;
            to += 1;
        }
        from += 1;
    }
    table
}

/// Manhattan distance between every pair of slots.
pub const DISTANCE_TABLE: [[u8; CELLS]; CELLS] = build_distance_table();

/// Sum over the eight tiles of the grid distance between their slot in `board`
/// and their slot in `goal`.
///
/// Never overestimates the number of slides left, since each slide moves one
/// tile by one step.
pub fn manhattan(board: &Board, goal: &Board) -> u32 {
    let here = board.positions();
    let there = goal.positions();

    (1..=TILE_COUNT)
        .map(|label| DISTANCE_TABLE[here[label]][there[label]] as u32)
        .sum()
}
