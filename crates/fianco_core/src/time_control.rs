//! Search limits and wall-clock budgeting.
//!
//! Cancellation in the alpha-beta path is cooperative and coarse: the
//! iterative-deepening driver consults the clock between depth iterations
//! only, never mid-subtree. The latency bound is therefore "time of the last
//! completed depth", not a hard deadline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Limits that control when an engine should stop searching: a maximum depth
/// in plies and an optional wall-clock budget for the whole move.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u8,
    /// Wall-clock budget for this move (None = unlimited)
    pub move_time: Option<Duration>,
    /// Controller for checking whether the search should stop
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Limits with only a depth constraint (no clock).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Limits with both a depth cap and a wall-clock budget.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Limits with only a wall-clock budget (depth effectively unbounded).
    pub fn time(move_time: Duration) -> Self {
        Self {
            depth: u8::MAX,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Start the clock. Call when the search begins.
    pub fn start(&self) {
        self.time_control.start();
    }

    /// True once the budget is spent or an external stop was requested.
    pub fn expired(&self) -> bool {
        self.time_control.check_time()
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Cheaply cloneable stop controller. The deadline is computed once at
/// `start`; `check_time` compares against it and latches the stop flag, and
/// `stop` lets an external caller cancel a search between depths.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    deadline: Arc<RwLock<Option<Instant>>>,
    budget: Option<Duration>,
}

impl TimeControl {
    pub fn new(budget: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            deadline: Arc::new(RwLock::new(None)),
            budget,
        }
    }

    /// Arm the deadline and clear any previous stop request.
    pub fn start(&self) {
        *self.deadline.write().unwrap() = self.budget.map(|b| Instant::now() + b);
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Request the search to stop at its next check point.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Check the clock, latching the stop flag once the deadline passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let Some(deadline) = *self.deadline.read().unwrap() {
            if Instant::now() >= deadline {
                self.stop();
                return true;
            }
        }
        false
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
