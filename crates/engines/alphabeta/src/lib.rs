//! Alpha-Beta Fianco Engine
//!
//! Negamax search with alpha-beta pruning, a Zobrist-keyed transposition
//! table, iterative deepening, and optional aspiration windows. This is the
//! strongest and the reference engine of the workspace.

mod search;
mod tt;

use std::path::Path;

use fianco_core::{Board, Engine, Evaluator, SearchLimits, SearchResult};

pub use search::{iterative_deepening, search_fixed, SearchConfig, ASPIRATION_DELTA};
pub use tt::{Bound, Probe, TranspositionTable, TtEntry, TtPersistError, DEFAULT_CAPACITY};

/// Fianco engine built on negamax with alpha-beta pruning.
///
/// This engine uses:
/// - Negamax search with alpha-beta pruning and iterative deepening
/// - A bounded, persistable transposition table
/// - The tactical evaluation function (configurable)
pub struct AlphaBetaEngine {
    config: SearchConfig,
    tt: TranspositionTable,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            tt: TranspositionTable::default(),
        }
    }

    /// The tuned competition setup: aspiration windows around the previous
    /// iteration plus the giveaway-move filter.
    pub fn competition() -> Self {
        Self::with_config(SearchConfig {
            evaluator: Evaluator::Tactical,
            aspiration: Some(ASPIRATION_DELTA),
            avoid_suicide: true,
        })
    }

    /// Warm the transposition table from a previous run. Best effort: a
    /// missing or unusable file just leaves the table empty.
    pub fn load_table(&mut self, path: &Path, capacity: usize) {
        self.tt = TranspositionTable::load(path, capacity);
    }

    /// Persist the transposition table for the next run.
    pub fn save_table(&self, path: &Path) -> Result<(), TtPersistError> {
        self.tt.save(path)
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        limits.start();
        let mut scratch = board.clone();
        iterative_deepening(&mut scratch, &limits, &self.config, &mut self.tt)
    }

    fn name(&self) -> &str {
        if self.config.avoid_suicide {
            "alphabeta-competition"
        } else {
            "alphabeta"
        }
    }

    fn new_game(&mut self) {
        self.tt.clear();
    }
}
