//! Random Move Fianco Engine
//!
//! Selects uniformly at random from the legal moves (which already carry
//! the mandatory-capture rule). Useful for:
//! - Exercising the match infrastructure
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use fianco_core::{legal_moves, Board, Engine, SearchLimits, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// An engine that plays random legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _limits: SearchLimits) -> SearchResult {
        let moves = legal_moves(board);
        match moves.choose(&mut thread_rng()).copied() {
            Some(mv) => SearchResult {
                best_move: Some(mv),
                score: 0,
                depth: 1,
                nodes: 1,
                stopped: false,
            },
            None => SearchResult::no_moves(),
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}
