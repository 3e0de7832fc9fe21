//! Bounded transposition table keyed by the Zobrist fingerprint.
//!
//! Every lookup is an optimization hint, never ground truth: a stored score
//! is only usable when it was searched at least as deep as the caller needs
//! and its bound type admits the caller's window. Losing the whole table
//! (eviction, failed load, fresh process) costs time, not correctness.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use fianco_core::{Move, ZOBRIST};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Default maximum number of entries.
pub const DEFAULT_CAPACITY: usize = 1 << 20;

/// How many entries the eviction scan inspects. Depth-preferred and
/// approximate: the shallowest of a small sample goes, keeping deep,
/// expensive-to-recompute results around.
const EVICTION_SAMPLE: usize = 8;

/// How a stored score relates to the window it was searched with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound {
    /// The search completed inside the window
    Exact,
    /// Fail-high: the true score is at least this value
    Lower,
    /// Fail-low: the true score is at most this value
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtEntry {
    pub score: i32,
    pub best_move: Move,
    pub depth: u8,
    pub bound: Bound,
}

/// Outcome of a probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    /// Usable at the requested depth and window; short-circuit the subtree.
    Hit(i32, Move),
    /// Present but not usable as a score; try this move first.
    Ordering(Move),
    Miss,
}

#[derive(Debug, Error)]
pub enum TtPersistError {
    #[error("table io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("table encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("table was built with a different Zobrist key set")]
    StaleKeys,
}

/// On-disk form. The key signature pins the table to the Zobrist key set it
/// was built with; a mismatch means every fingerprint in it is meaningless.
#[derive(Serialize, Deserialize)]
struct PersistedTable {
    key_signature: u64,
    entries: Vec<(u64, TtEntry)>,
}

pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
    capacity: usize,
}

impl TranspositionTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Look up `hash` for a search that still has `depth` plies to go under
    /// the window `(alpha, beta)`.
    pub fn probe(&self, hash: u64, depth: u8, alpha: i32, beta: i32) -> Probe {
        let entry = match self.entries.get(&hash) {
            Some(e) => e,
            None => return Probe::Miss,
        };
        if entry.depth >= depth {
            match entry.bound {
                Bound::Exact => return Probe::Hit(entry.score, entry.best_move),
                Bound::Lower if entry.score >= beta => {
                    return Probe::Hit(entry.score, entry.best_move)
                }
                Bound::Upper if entry.score <= alpha => {
                    return Probe::Hit(entry.score, entry.best_move)
                }
                _ => {}
            }
        }
        Probe::Ordering(entry.best_move)
    }

    /// Record a finished subtree. A fresh key at capacity evicts the
    /// shallowest of a small sample first.
    pub fn store(&mut self, hash: u64, entry: TtEntry) {
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&hash) {
            self.evict_one();
        }
        self.entries.insert(hash, entry);
    }

    fn evict_one(&mut self) {
        let victim = self
            .entries
            .iter()
            .take(EVICTION_SAMPLE)
            .min_by_key(|(_, e)| e.depth)
            .map(|(&k, _)| k);
        if let Some(k) = victim {
            self.entries.remove(&k);
        }
    }

    /// Serialize the table. The format only promises to round-trip through
    /// the same build's `load`.
    pub fn save(&self, path: &Path) -> Result<(), TtPersistError> {
        let persisted = PersistedTable {
            key_signature: ZOBRIST.signature(),
            entries: self.entries.iter().map(|(&k, &e)| (k, e)).collect(),
        };
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), &persisted)?;
        Ok(())
    }

    /// Load a previously saved table. Warm-up only: a missing, corrupt, or
    /// stale file yields an empty table and a warning, never an error.
    pub fn load(path: &Path, capacity: usize) -> Self {
        let mut table = Self::new(capacity);
        match Self::try_load(path) {
            Ok(entries) => {
                for (k, e) in entries.into_iter().take(table.capacity) {
                    table.entries.insert(k, e);
                }
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "discarding persisted table");
            }
        }
        table
    }

    fn try_load(path: &Path) -> Result<Vec<(u64, TtEntry)>, TtPersistError> {
        let file = File::open(path)?;
        let persisted: PersistedTable = serde_json::from_reader(BufReader::new(file))?;
        if persisted.key_signature != ZOBRIST.signature() {
            return Err(TtPersistError::StaleKeys);
        }
        Ok(persisted.entries)
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;
