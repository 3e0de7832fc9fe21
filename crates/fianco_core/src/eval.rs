//! Static evaluation of Fianco positions.
//!
//! All scores are from the perspective of the side passed in: positive is
//! good for that side. Terminal positions are not scored here — the search
//! detects them and uses `WIN_SCORE` directly.

use crate::movegen::is_exposed;
use crate::{board::Board, types::*};
use serde::{Deserialize, Serialize};

/// Sentinel for a decided game, far outside the heuristic range.
pub const WIN_SCORE: i32 = 10_000;

const PIECE_VALUE: i32 = 30;
const ADVANCE_WEIGHT: i32 = 5;
const CONTROL_WEIGHT: i32 = 3;
const MOBILITY_BONUS: i32 = 3;
const EXPOSURE_PENALTY: i32 = 5;

/// The closed set of evaluation strategies. Each combines the terms of the
/// one before it; `Tactical` is the full function the strong engines use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluator {
    /// Piece count differential only.
    Material,
    /// Material plus per-piece advancement toward the target row.
    Advancement,
    /// Advancement plus central row/column control.
    Positional,
    /// Positional plus mobility differential and capture exposure.
    Tactical,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::Tactical
    }
}

impl Evaluator {
    pub const ALL: [Evaluator; 4] = [
        Evaluator::Material,
        Evaluator::Advancement,
        Evaluator::Positional,
        Evaluator::Tactical,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Evaluator::Material => "material",
            Evaluator::Advancement => "advancement",
            Evaluator::Positional => "positional",
            Evaluator::Tactical => "tactical",
        }
    }

    /// Heuristic score of `board` from `side`'s perspective.
    pub fn evaluate(self, board: &Board, side: Side) -> i32 {
        let mut score = 0i32;
        let mut mobility = 0i32;

        for at in 0..NUM_SQUARES as u8 {
            let owner = match board.piece_at(at) {
                Some(o) => o,
                None => continue,
            };
            let sign = if owner == side { 1 } else { -1 };

            score += sign * PIECE_VALUE;
            if self == Evaluator::Material {
                continue;
            }

            score += sign * ADVANCE_WEIGHT * advancement(at, owner);
            if self == Evaluator::Advancement {
                continue;
            }

            score += sign * CONTROL_WEIGHT * centrality(at);
            if self == Evaluator::Positional {
                continue;
            }

            mobility += sign * free_steps(board, at, owner);
            if is_exposed(board, at, owner) {
                score -= sign * EXPOSURE_PENALTY;
            }
        }

        if self == Evaluator::Tactical {
            score += MOBILITY_BONUS * mobility.signum();
        }
        score
    }
}

/// Rows already travelled toward the opponent's home row, 0..=8.
fn advancement(at: u8, owner: Side) -> i32 {
    let r = row_of(at);
    match owner {
        Side::White => r as i32,
        Side::Black => (GRID_SIZE - 1 - r) as i32,
    }
}

/// Higher near the center square (4, 4), range 0..=8.
fn centrality(at: u8) -> i32 {
    let r = row_of(at) as i32;
    let c = col_of(at) as i32;
    4 - (4 - r).abs() + 4 - (4 - c).abs()
}

/// Empty cells this piece could slide to (forward, left, right).
fn free_steps(board: &Board, at: u8, owner: Side) -> i32 {
    let r = row_of(at);
    let c = col_of(at);
    let mut n = 0;
    for (dr, dc) in [(owner.forward(), 0), (0, -1), (0, 1)] {
        if let Some(to) = sq(r + dr, c + dc) {
            if board.piece_at(to).is_none() {
                n += 1;
            }
        }
    }
    n
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
