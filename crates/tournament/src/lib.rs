//! Tournament Runner for the Fianco engines
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Tracking Elo ratings across engine variants
//! - Persisting and reporting results
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the alpha-beta and UCT engines
//! cargo run -p tournament -- match alphabeta uct --games 20 --depth 4
//!
//! # Run a gauntlet (one engine vs many)
//! cargo run -p tournament -- gauntlet competition --games 10
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;
