//! Board representation and move generation for the 3x3 sliding puzzle.
//!
//! A board is a flat array of nine slots in row-major order. Each slot holds a
//! tile label in `1..=8`, or [`EMPTY`] for the blank slot.

use std::fmt;
use std::str::FromStr;

use crate::error::SolveError;

/// Grid dimension per axis.
pub const DIM: usize = 3;

/// Number of slots on the board.
pub const CELLS: usize = DIM * DIM;

/// Number of numbered tiles (every slot but the blank).
pub const TILE_COUNT: usize = CELLS - 1;

/// Marker stored in the blank slot.
pub const EMPTY: u8 = 0;

/// A (row, column) grid position.
pub type Coord = (usize, usize);

/// Converts a linear slot index to (row, column) coordinates.
#[inline(always)]
pub const fn idx_to_coord(slot: usize) -> Coord {
    (slot / DIM, slot % DIM)
}

/// Converts (row, column) coordinates to a linear slot index.
#[inline(always)]
pub const fn coord_to_idx(row: usize, col: usize) -> usize {
    row * DIM + col
}

/// A single slide, named by the direction the blank slot travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Generation order for successors. Node indices and tie-breaks depend on it.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Returns the slot the blank swaps with, or `None` if the move would leave the grid.
    #[inline]
    pub fn target(self, empty: usize) -> Option<usize> {
        let (row, col) = idx_to_coord(empty);
        match self {
            Move::Up => (row > 0).then(|| empty - DIM),
            Move::Down => (row < DIM - 1).then(|| empty + DIM),
            Move::Left => (col > 0).then(|| empty - 1),
            Move::Right => (col < DIM - 1).then(|| empty + 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        f.write_str(name)
    }
}

/// An immutable puzzle arrangement.
///
/// Construction validates that every label `1..=8` appears exactly once next to
/// a single blank, so every `Board` in circulation is well formed. Moves return
/// a new board and leave the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    slots: [u8; CELLS],
    /// Index of the blank slot, cached from `slots`.
    empty: u8,
}

impl Board {
    /// Builds a board from nine slots, using [`EMPTY`] for the blank.
    pub fn new(slots: [u8; CELLS]) -> Result<Self, SolveError> {
        let mut seen = [false; CELLS];
        for &label in &slots {
            if label as usize >= CELLS {
                return Err(SolveError::malformed(format!(
                    "tile label {label} is outside 1..={TILE_COUNT}"
                )));
            }
            if seen[label as usize] {
                return Err(if label == EMPTY {
                    SolveError::malformed("more than one empty slot")
                } else {
                    SolveError::malformed(format!("tile {label} appears more than once"))
                });
            }
            seen[label as usize] = true;
        }

        // nine slots with no repeats and no label above 8 must cover 0..=8 exactly
        let empty = slots
            .iter()
            .position(|&label| label == EMPTY)
            .ok_or_else(|| SolveError::malformed("no empty slot"))?;

        Ok(Self {
            slots,
            empty: empty as u8,
        })
    }

    /// Builds a board from a slice that must hold exactly nine slots.
    pub fn from_slice(slots: &[u8]) -> Result<Self, SolveError> {
        let slots: [u8; CELLS] = slots.try_into().map_err(|_| {
            SolveError::malformed(format!("expected {CELLS} slots, got {}", slots.len()))
        })?;
        Self::new(slots)
    }

    /// The raw slots in row-major order.
    #[inline]
    pub fn slots(&self) -> &[u8; CELLS] {
        &self.slots
    }

    /// Slot index of the blank.
    #[inline]
    pub fn empty_slot(&self) -> usize {
        self.empty as usize
    }

    /// Inverse lookup: `positions()[label]` is the slot holding `label`.
    pub fn positions(&self) -> [usize; CELLS] {
        let mut positions = [0usize; CELLS];
        for (slot, &label) in self.slots.iter().enumerate() {
            positions[label as usize] = slot;
        }
        positions
    }

    /// Tile labels in slot order, skipping the blank.
    pub fn tiles(&self) -> impl Iterator<Item = u8> + '_ {
        self.slots.iter().copied().filter(|&label| label != EMPTY)
    }

    /// Applies a move, returning the resulting board if the move is legal here.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let empty = self.empty_slot();
        let target = mv.target(empty)?;

        let mut slots = self.slots;
        slots.swap(empty, target);
        Some(Board {
            slots,
            empty: target as u8,
        })
    }

    /// All legal successors, in [`Move::ALL`] order.
    ///
    /// Corners yield two successors, edges three and the centre four.
    pub fn successors(self) -> impl Iterator<Item = (Move, Board)> {
        Move::ALL
            .into_iter()
            .filter_map(move |mv| self.apply(mv).map(|next| (mv, next)))
    }

    /// The move that turns `self` into `next`, if the two boards are one slide apart.
    pub fn move_to(&self, next: &Board) -> Option<Move> {
        Move::ALL
            .into_iter()
            .find(|&mv| self.apply(mv).as_ref() == Some(next))
    }
}

/// Parses nine slots, either as separated tokens (`"2,8,3,1,_,4,7,6,5"` or
/// `"2 8 3 1 0 4 7 6 5"`) or as a compact string (`"2831.4765"`).
///
/// The blank may be written as `0`, `_` or `.`.
impl FromStr for Board {
    type Err = SolveError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect();

        let slots: Vec<u8> = if tokens.len() == 1 && tokens[0].chars().count() == CELLS {
            tokens[0]
                .chars()
                .map(|c| parse_slot(&c.to_string()))
                .collect::<Result<_, _>>()?
        } else {
            tokens
                .iter()
                .map(|token| parse_slot(token))
                .collect::<Result<_, _>>()?
        };

        Board::from_slice(&slots)
    }
}

fn parse_slot(token: &str) -> Result<u8, SolveError> {
    match token {
        "_" | "." => Ok(EMPTY),
        _ => token
            .parse::<u8>()
            .map_err(|_| SolveError::malformed(format!("cannot read slot '{token}'"))),
    }
}

/// Renders the board as three rows of three, with `.` for the blank.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..DIM {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..DIM {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.slots[coord_to_idx(row, col)] {
                    EMPTY => f.write_str(".")?,
                    label => write!(f, "{label}")?,
                }
            }
        }
        Ok(())
    }
}
