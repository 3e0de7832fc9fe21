//! Monte-Carlo Fianco Engines
//!
//! Two move-selection strategies that share the core board model:
//! - `UctEngine`: tree search with UCT selection, expansion, random
//!   simulation, and backpropagation.
//! - `FlatMonteCarloEngine`: parallel evaluation-guided rollouts that pick
//!   the best-performing evaluation function, then answer with its
//!   highest-ranked root move.

mod rollout;
mod tree;

use fianco_core::{legal_moves, Board, Engine, SearchLimits, SearchResult};
use tracing::debug;

pub use rollout::{best_candidate, evaluate_candidates, greedy_move, RolloutReport};
pub use tree::UctSearch;

/// Default UCT iteration budget per move.
pub const DEFAULT_ITERATIONS: u32 = 2_000;
/// Default playouts per candidate evaluator for the flat engine.
pub const DEFAULT_PLAYOUTS: u32 = 64;

pub struct UctEngine {
    iterations: u32,
}

impl UctEngine {
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }
}

impl Default for UctEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl Engine for UctEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        limits.start();
        let mut search = UctSearch::new(self.iterations);
        let best_move = search.run(board, &mut rand::thread_rng());
        if best_move.is_none() {
            return SearchResult::no_moves();
        }
        debug!(
            iterations = self.iterations,
            tree = search.tree_size(),
            "uct search done"
        );
        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.iterations as u64,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "uct"
    }
}

pub struct FlatMonteCarloEngine {
    playouts: u32,
}

impl FlatMonteCarloEngine {
    pub fn new(playouts: u32) -> Self {
        Self { playouts }
    }
}

impl Default for FlatMonteCarloEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYOUTS)
    }
}

impl Engine for FlatMonteCarloEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        limits.start();
        if legal_moves(board).is_empty() {
            return SearchResult::no_moves();
        }
        let side = board.side_to_move;
        let reports = evaluate_candidates(board, side, self.playouts);
        let chosen = best_candidate(&reports);
        for r in &reports {
            debug!(
                evaluator = r.evaluator.name(),
                wins = r.wins,
                playouts = r.playouts,
                "rollout batch"
            );
        }
        let best_move = greedy_move(board, chosen);
        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: (self.playouts as u64) * fianco_core::Evaluator::ALL.len() as u64,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "flat-montecarlo"
    }
}
