use crate::types::*;
use crate::zobrist::ZOBRIST;
use thiserror::Error;

/// Malformed external board input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid occupant code {code} at row {row}, col {col} (expected 0, 1 or 2)")]
    InvalidOccupant { code: u8, row: usize, col: usize },
}

/// A Fianco position: 81 cells, the side to move, and an incrementally
/// maintained Zobrist hash. Mutated in place by `make_move` and restored by
/// `unmake_move`; the hash tracks every mutation in lock-step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Side>; NUM_SQUARES],
    pub side_to_move: Side,
    hash: u64,
}

/// Token returned by `make_move`, consumed by `unmake_move`.
#[derive(Clone, Copy, Debug)]
pub struct Undo {
    pub captured: Option<Side>,
}

impl Board {
    /// The standard starting position: each side fills its home row and
    /// stacks a wedge of three pairs in front of it.
    pub fn startpos() -> Self {
        let mut b = Board::empty(Side::White);
        for col in 0..GRID_SIZE {
            b.set_piece(sq(0, col).unwrap(), Some(Side::White));
            b.set_piece(sq(8, col).unwrap(), Some(Side::Black));
        }
        for (row, col) in [(1, 1), (1, 7), (2, 2), (2, 6), (3, 3), (3, 5)] {
            b.set_piece(sq(row, col).unwrap(), Some(Side::White));
            b.set_piece(sq(8 - row, col).unwrap(), Some(Side::Black));
        }
        b
    }

    /// An empty board. Mostly useful for building test positions.
    pub fn empty(side_to_move: Side) -> Self {
        let mut b = Board {
            cells: [None; NUM_SQUARES],
            side_to_move,
            hash: 0,
        };
        b.hash = b.compute_hash();
        b
    }

    /// Build a board from the external 9x9 occupancy grid encoding:
    /// 0 = empty, 1 = White, 2 = Black. Row 0 is White's home row.
    /// Fails fast on invalid occupant codes rather than indexing blindly.
    pub fn from_grid(grid: &[[u8; 9]; 9], side_to_move: Side) -> Result<Self, BoardError> {
        let mut b = Board::empty(side_to_move);
        for (row, cols) in grid.iter().enumerate() {
            for (col, &code) in cols.iter().enumerate() {
                let occupant = match code {
                    0 => None,
                    1 => Some(Side::White),
                    2 => Some(Side::Black),
                    _ => return Err(BoardError::InvalidOccupant { code, row, col }),
                };
                b.set_piece((row * 9 + col) as u8, occupant);
            }
        }
        Ok(b)
    }

    /// The external 0/1/2 grid encoding of this position.
    pub fn to_grid(&self) -> [[u8; 9]; 9] {
        let mut grid = [[0u8; 9]; 9];
        for sq in 0..NUM_SQUARES {
            grid[sq / 9][sq % 9] = match self.cells[sq] {
                None => 0,
                Some(Side::White) => 1,
                Some(Side::Black) => 2,
            };
        }
        grid
    }

    pub fn piece_at(&self, sq: u8) -> Option<Side> {
        self.cells[sq as usize]
    }

    /// Place or clear a square, keeping the hash in sync.
    pub fn set_piece(&mut self, sq: u8, pc: Option<Side>) {
        if let Some(s) = self.cells[sq as usize] {
            self.hash ^= ZOBRIST.cell_key(sq, s);
        }
        self.cells[sq as usize] = pc;
        if let Some(s) = pc {
            self.hash ^= ZOBRIST.cell_key(sq, s);
        }
    }

    /// The incrementally maintained Zobrist hash of this position.
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Recompute the hash from scratch. Used at construction; the search
    /// relies on the incremental updates staying equal to this.
    pub fn compute_hash(&self) -> u64 {
        let mut h = 0u64;
        for sq in 0..NUM_SQUARES as u8 {
            if let Some(s) = self.cells[sq as usize] {
                h ^= ZOBRIST.cell_key(sq, s);
            }
        }
        if self.side_to_move == Side::Black {
            h ^= ZOBRIST.side_to_move;
        }
        h
    }

    /// Play `mv` for the side to move. O(1): relocates the mover, clears the
    /// jumped square on captures, flips the side to move, and XOR-updates the
    /// hash for every touched cell.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let mover = self.side_to_move;
        debug_assert_eq!(self.piece_at(mv.from), Some(mover), "no mover on from-square");
        debug_assert!(self.piece_at(mv.to).is_none(), "destination occupied");

        let mut captured = None;
        if mv.is_capture {
            let mid = mv.captured_sq();
            captured = self.piece_at(mid);
            debug_assert_eq!(captured, Some(mover.other()), "capture without victim");
            self.set_piece(mid, None);
        }
        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(mover));

        self.side_to_move = mover.other();
        self.hash ^= ZOBRIST.side_to_move;

        Undo { captured }
    }

    /// Exact inverse of `make_move`: restores the mover's original cell, the
    /// captured piece, the side to move, and (bit-for-bit) the hash.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.hash ^= ZOBRIST.side_to_move;
        self.side_to_move = self.side_to_move.other();
        let mover = self.side_to_move;

        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(mover));
        if mv.is_capture {
            self.set_piece(mv.captured_sq(), undo.captured);
        }
    }

    pub fn count(&self, side: Side) -> u32 {
        self.cells.iter().filter(|&&c| c == Some(side)).count() as u32
    }

    /// Decided-game check: a side wins the moment one of its pieces stands on
    /// the opponent's home row, or the moment the opponent has no pieces
    /// left. The side-to-move-has-no-moves loss is the move generator's to
    /// report (an empty move list), so this stays a pure board predicate.
    pub fn winner(&self) -> Option<Side> {
        for col in 0..GRID_SIZE {
            if let Some(s) = sq(Side::White.target_row(), col) {
                if self.piece_at(s) == Some(Side::White) {
                    return Some(Side::White);
                }
            }
            if let Some(s) = sq(Side::Black.target_row(), col) {
                if self.piece_at(s) == Some(Side::Black) {
                    return Some(Side::Black);
                }
            }
        }
        if self.count(Side::White) == 0 {
            return Some(Side::Black);
        }
        if self.count(Side::Black) == 0 {
            return Some(Side::White);
        }
        None
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
