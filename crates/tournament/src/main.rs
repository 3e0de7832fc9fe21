//! Tournament CLI
//!
//! Run matches between Fianco engines and track Elo ratings.

use std::env;
use std::path::Path;

use alphabeta_engine::AlphaBetaEngine;
use fianco_core::Engine;
use montecarlo_engine::{FlatMonteCarloEngine, UctEngine};
use random_engine::RandomEngine;
use tournament::{
    quick_match, EloBook, MatchConfig, MatchRunner, TournamentConfig, TournamentResults,
};

const ELO_FILE: &str = "tournament_elo.json";

fn print_usage() {
    println!("Fianco Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D]");
    println!("  tournament gauntlet <challenger> [--games N] [--depth D]");
    println!("  tournament leaderboard");
    println!();
    println!("Engines:");
    println!("  alphabeta     - Negamax alpha-beta with transposition table");
    println!("  competition   - Alpha-beta with aspiration windows and giveaway filter");
    println!("  uct[:N]       - Monte-Carlo tree search, N iterations per move");
    println!("  flat[:N]      - Flat Monte-Carlo, N playouts per evaluator");
    println!("  random        - Uniform random baseline");
    println!();
    println!("Examples:");
    println!("  tournament match alphabeta uct:5000 --games 20 --depth 4");
    println!("  tournament gauntlet competition --games 10");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    let parts: Vec<&str> = spec.split(':').collect();
    let arg = parts.get(1).and_then(|s| s.parse::<u32>().ok());
    match parts[0].to_lowercase().as_str() {
        "alphabeta" | "ab" => Box::new(AlphaBetaEngine::new()),
        "competition" | "comp" => Box::new(AlphaBetaEngine::competition()),
        "uct" | "mcts" => match arg {
            Some(iters) => Box::new(UctEngine::new(iters)),
            None => Box::new(UctEngine::default()),
        },
        "flat" | "mcs" => match arg {
            Some(playouts) => Box::new(FlatMonteCarloEngine::new(playouts)),
            None => Box::new(FlatMonteCarloEngine::default()),
        },
        "random" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}, using alphabeta", spec);
            Box::new(AlphaBetaEngine::new())
        }
    }
}

fn parse_games_depth(args: &[String], games: &mut u32, depth: &mut u8) {
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    *games = args[i + 1].parse().unwrap_or(*games);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    *depth = args[i + 1].parse().unwrap_or(*depth);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];
    let mut num_games: u32 = 10;
    let mut depth: u8 = 4;
    parse_games_depth(&args[2..], &mut num_games, &mut depth);

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, Depth: {}", num_games, depth);
    println!();

    let mut engine1 = create_engine(engine1_spec);
    let mut engine2 = create_engine(engine2_spec);

    let config = MatchConfig {
        num_games,
        depth,
        verbose: true,
        ..Default::default()
    };
    let result = MatchRunner::new(config).run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut book = EloBook::load(Path::new(ELO_FILE)).unwrap_or_default();
    book.apply(engine1_spec, engine2_spec, &result);
    book.print_leaderboard();

    if let Err(e) = book.save(Path::new(ELO_FILE)) {
        eprintln!("Warning: Failed to save Elo book: {}", e);
    }
}

fn run_gauntlet(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: gauntlet requires a challenger engine");
        print_usage();
        return;
    }

    let challenger_spec = &args[0];
    let mut num_games: u32 = 10;
    let mut depth: u8 = 4;
    parse_games_depth(&args[1..], &mut num_games, &mut depth);

    let opponents = vec!["alphabeta", "uct", "random"];

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", opponents);
    println!("Games per match: {}, Depth: {}", num_games, depth);

    let mut book = EloBook::load(Path::new(ELO_FILE)).unwrap_or_default();
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        TournamentConfig {
            games_per_match: num_games,
            search_depth: depth,
            ..Default::default()
        },
    );

    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let mut challenger = create_engine(challenger_spec);
        let mut opp_engine = create_engine(opponent);
        let result = quick_match(challenger.as_mut(), opp_engine.as_mut(), num_games, depth);

        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );

        book.apply(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    book.print_leaderboard();
    results.print_report();

    if let Err(e) = book.save(Path::new(ELO_FILE)) {
        eprintln!("Warning: Failed to save Elo book: {}", e);
    }
}

fn show_leaderboard() {
    match EloBook::load(Path::new(ELO_FILE)) {
        Ok(book) => book.print_leaderboard(),
        Err(_) => {
            println!("No tournament data found. Run some matches first!");
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
