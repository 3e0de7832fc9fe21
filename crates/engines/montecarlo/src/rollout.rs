//! Flat Monte-Carlo rollouts.
//!
//! Instead of growing a tree, every candidate evaluation function plays many
//! independent evaluation-guided games from the root. Workers run in
//! parallel on their own board copies and report a scalar win count; plain
//! summation aggregates them, so no locking is involved.

use fianco_core::{legal_moves, Board, Evaluator, Move, Side};
use rand::Rng;
use rayon::prelude::*;

use crate::tree::MAX_PLAYOUT_PLIES;

/// Chance per ply that a playout plays a random move instead of the
/// evaluator's greedy pick.
const EXPLORATION_RATE: f64 = 0.1;

/// Aggregate outcome of one candidate's playout batch.
#[derive(Clone, Copy, Debug)]
pub struct RolloutReport {
    pub evaluator: Evaluator,
    pub wins: f64,
    pub playouts: u32,
}

impl RolloutReport {
    pub fn win_rate(&self) -> f64 {
        if self.playouts == 0 {
            0.5
        } else {
            self.wins / self.playouts as f64
        }
    }
}

/// Run `playouts` guided games per candidate evaluator and report each
/// candidate's aggregate wins for `side`.
pub fn evaluate_candidates(board: &Board, side: Side, playouts: u32) -> Vec<RolloutReport> {
    Evaluator::ALL
        .iter()
        .map(|&evaluator| {
            let wins: f64 = (0..playouts)
                .into_par_iter()
                .map_init(rand::thread_rng, |rng, _| {
                    guided_playout(board.clone(), side, evaluator, EXPLORATION_RATE, rng)
                })
                .sum();
            RolloutReport {
                evaluator,
                wins,
                playouts,
            }
        })
        .collect()
}

/// The candidate with the best aggregate win rate.
pub fn best_candidate(reports: &[RolloutReport]) -> Evaluator {
    reports
        .iter()
        .max_by(|a, b| a.win_rate().total_cmp(&b.win_rate()))
        .map(|r| r.evaluator)
        .unwrap_or_default()
}

/// The root move `evaluator` ranks highest for the side to move.
pub fn greedy_move(board: &Board, evaluator: Evaluator) -> Option<Move> {
    let mut scratch = board.clone();
    let side = scratch.side_to_move;
    let moves = legal_moves(&scratch);
    let mut best: Option<(Move, i32)> = None;
    for mv in moves {
        let undo = scratch.make_move(mv);
        let score = evaluator.evaluate(&scratch, side);
        scratch.unmake_move(mv, undo);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

/// Play one game to the end on an owned board, each side greedily following
/// `evaluator` with an `epsilon` chance of a random move. Returns 1.0 when
/// `side` wins, 0.0 when it loses, 0.5 for a capped game.
fn guided_playout(
    mut board: Board,
    side: Side,
    evaluator: Evaluator,
    epsilon: f64,
    rng: &mut impl Rng,
) -> f64 {
    for _ in 0..MAX_PLAYOUT_PLIES {
        if let Some(winner) = board.winner() {
            return score_for(winner, side);
        }
        let moves = legal_moves(&board);
        if moves.is_empty() {
            return score_for(board.side_to_move.other(), side);
        }
        let mv = if epsilon > 0.0 && rng.gen::<f64>() < epsilon {
            moves[rng.gen_range(0..moves.len())]
        } else {
            pick_greedy(&mut board, &moves, evaluator)
        };
        board.make_move(mv);
    }
    0.5
}

fn pick_greedy(board: &mut Board, moves: &[Move], evaluator: Evaluator) -> Move {
    let mover = board.side_to_move;
    let mut best = moves[0];
    let mut best_score = i32::MIN;
    for &mv in moves {
        let undo = board.make_move(mv);
        let score = evaluator.evaluate(board, mover);
        board.unmake_move(mv, undo);
        if score > best_score {
            best_score = score;
            best = mv;
        }
    }
    best
}

fn score_for(winner: Side, side: Side) -> f64 {
    if winner == side {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "rollout_tests.rs"]
mod rollout_tests;
