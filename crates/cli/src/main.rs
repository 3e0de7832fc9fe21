//! Line-protocol engine front-end.
//!
//! External collaborators drive the engines over stdin/stdout:
//!
//! ```text
//! position start              set up the starting position
//! position grid <rows> <w|b>  set up a 0/1/2 grid (nine '/'-separated rows)
//! engine <name>               select alphabeta|competition|uct|flat|random
//! move <e2-e3>                play a move on the internal board
//! go [depth N] [movetime MS]  search and print `bestmove ...`
//! show                        print the grid and side to move
//! newgame                     reset engine state and the board
//! quit
//! ```

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use fianco_core::{
    grid_to_text, move_to_text, parse_grid, parse_side, parse_text_move, Board, Engine,
    SearchLimits, Side,
};
use tracing::debug;

use alphabeta_engine::AlphaBetaEngine;
use montecarlo_engine::{FlatMonteCarloEngine, UctEngine};
use random_engine::RandomEngine;

fn create_engine(name: &str) -> Option<Box<dyn Engine>> {
    match name {
        "alphabeta" => Some(Box::new(AlphaBetaEngine::new())),
        "competition" => Some(Box::new(AlphaBetaEngine::competition())),
        "uct" => Some(Box::new(UctEngine::default())),
        "flat" => Some(Box::new(FlatMonteCarloEngine::default())),
        "random" => Some(Box::new(RandomEngine::new())),
        _ => None,
    }
}

fn parse_limits(parts: &[&str]) -> SearchLimits {
    let mut depth: Option<u8> = None;
    let mut movetime: Option<u64> = None;
    let mut i = 0;
    while i + 1 < parts.len() {
        match parts[i] {
            "depth" => depth = parts[i + 1].parse().ok(),
            "movetime" => movetime = parts[i + 1].parse().ok(),
            _ => {}
        }
        i += 2;
    }
    match (depth, movetime) {
        (Some(d), Some(ms)) => SearchLimits::depth_and_time(d, Duration::from_millis(ms)),
        (Some(d), None) => SearchLimits::depth(d),
        (None, Some(ms)) => SearchLimits::time(Duration::from_millis(ms)),
        (None, None) => SearchLimits::default(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut board = Board::startpos();
    let mut engine: Box<dyn Engine> = Box::new(AlphaBetaEngine::new());

    for line in stdin.lock().lines() {
        let line = line?;
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "position" => match parts.get(1).copied() {
                Some("start") => board = Board::startpos(),
                Some("grid") if parts.len() >= 4 => {
                    match parse_side(parts[3]).and_then(|side| parse_grid(parts[2], side)) {
                        Ok(b) => board = b,
                        Err(e) => writeln!(stdout, "error {}", e)?,
                    }
                }
                _ => writeln!(stdout, "error expected 'position start' or 'position grid <rows> <w|b>'")?,
            },
            "engine" => match parts.get(1).copied().and_then(create_engine) {
                Some(e) => {
                    debug!(engine = e.name(), "engine selected");
                    engine = e;
                }
                None => writeln!(stdout, "error unknown engine")?,
            },
            "move" => match parts.get(1) {
                Some(txt) => match parse_text_move(&board, txt) {
                    Ok(mv) => {
                        board.make_move(mv);
                    }
                    Err(e) => writeln!(stdout, "error {}", e)?,
                },
                None => writeln!(stdout, "error expected a move")?,
            },
            "go" => {
                let limits = parse_limits(&parts[1..]);
                let result = engine.search(&board, limits);
                writeln!(
                    stdout,
                    "info depth {} score {} nodes {}",
                    result.depth, result.score, result.nodes
                )?;
                match result.best_move {
                    Some(mv) => writeln!(stdout, "bestmove {}", move_to_text(mv))?,
                    None => writeln!(stdout, "bestmove (none)")?,
                }
                stdout.flush()?;
            }
            "show" => {
                let side = match board.side_to_move {
                    Side::White => "w",
                    Side::Black => "b",
                };
                writeln!(stdout, "{} {}", grid_to_text(&board), side)?;
            }
            "newgame" => {
                board = Board::startpos();
                engine.new_game();
            }
            "quit" => break,
            _ => {
                // ignore unknown commands
            }
        }
    }
    Ok(())
}
