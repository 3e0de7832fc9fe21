//! Match runner for playing games between engines

use fianco_core::{legal_moves, Board, Engine, SearchLimits, Side};
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::time::Duration;

use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum time per move (None = no limit)
    pub time_per_move: Option<Duration>,
    /// Maximum moves per game before declaring a draw
    pub max_moves: u32,
    /// Random plies played before the engines take over, to vary openings
    pub opening_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            time_per_move: None,
            max_moves: 200,
            opening_plies: 0,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Create search limits based on this config
    fn search_limits(&self) -> SearchLimits {
        match self.time_per_move {
            Some(time) => SearchLimits::depth_and_time(self.depth, time),
            None => SearchLimits::depth(self.depth),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines.
    ///
    /// Returns the result from engine1's perspective.
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flipped()
            };
            result.record(game_result);

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns the result from White's perspective.
    fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameResult {
        let mut board = Board::startpos();
        white.new_game();
        black.new_game();

        let mut rng = thread_rng();
        for _ in 0..self.config.opening_plies {
            if board.winner().is_some() {
                break;
            }
            match legal_moves(&board).choose(&mut rng).copied() {
                Some(mv) => {
                    board.make_move(mv);
                }
                None => break,
            }
        }

        for _move_num in 0..self.config.max_moves {
            if let Some(winner) = board.winner() {
                return if winner == Side::White {
                    GameResult::Win
                } else {
                    GameResult::Loss
                };
            }

            // Fresh limits per move (resets the clock)
            let limits = self.config.search_limits();
            let result = if board.side_to_move == Side::White {
                white.search(&board, limits)
            } else {
                black.search(&board, limits)
            };

            match result.best_move {
                Some(mv) => {
                    debug_assert!(legal_moves(&board).contains(&mv), "engine played illegal move");
                    board.make_move(mv);
                }
                None => {
                    // Stuck side loses on the spot.
                    return if board.side_to_move == Side::White {
                        GameResult::Loss
                    } else {
                        GameResult::Win
                    };
                }
            }
        }

        // Move cap reached; the game layer calls it a draw.
        GameResult::Draw
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
