use super::*;
use crate::{AlphaBetaEngine, DEFAULT_CAPACITY};
use fianco_core::{legal_moves, row_of, sq, Engine, Side};

fn custom(white: &[(i8, i8)], black: &[(i8, i8)], stm: Side) -> Board {
    let mut b = Board::empty(stm);
    for &(r, c) in white {
        b.set_piece(sq(r, c).unwrap(), Some(Side::White));
    }
    for &(r, c) in black {
        b.set_piece(sq(r, c).unwrap(), Some(Side::Black));
    }
    b
}

/// Reference implementation: unpruned negamax without any table.
fn negamax_plain(board: &mut Board, depth: u8, ev: Evaluator) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == board.side_to_move {
            WIN_SCORE
        } else {
            -WIN_SCORE
        };
    }
    let moves = legal_moves(board);
    if moves.is_empty() {
        return -WIN_SCORE;
    }
    if depth == 0 {
        return ev.evaluate(board, board.side_to_move);
    }
    let mut best = i32::MIN + 1;
    for mv in moves {
        let undo = board.make_move(mv);
        let score = -negamax_plain(board, depth - 1, ev);
        board.unmake_move(mv, undo);
        best = best.max(score);
    }
    best
}

#[test]
fn test_startpos_depth_4_returns_sound_move() {
    let board = Board::startpos();
    let mut engine = AlphaBetaEngine::new();
    let result = engine.search(&board, SearchLimits::depth(4));

    let mv = result.best_move.expect("start position has moves");
    assert_eq!(board.piece_at(mv.from), Some(Side::White));
    assert!(board.piece_at(mv.to).is_none());
    assert_eq!(result.depth, 4);
    assert!(result.nodes > 0);
    assert!(!result.stopped);
}

#[test]
fn test_one_ply_forced_win_scores_win() {
    // White on e8, one step from the target row with no blocker.
    let board = custom(&[(7, 4)], &[(4, 0)], Side::White);
    for depth in 1..=4 {
        let mut engine = AlphaBetaEngine::new();
        let result = engine.search(&board, SearchLimits::depth(depth));
        assert!(result.score >= WIN_SCORE, "depth {depth}: {}", result.score);
        assert_eq!(row_of(result.best_move.unwrap().to), 8);
    }
}

#[test]
fn test_no_legal_moves_is_reported_distinctly() {
    // White's lone piece is walled in on the a-file.
    let board = custom(&[(4, 0)], &[(5, 0), (4, 1)], Side::White);
    let mut engine = AlphaBetaEngine::new();
    let result = engine.search(&board, SearchLimits::depth(4));
    assert!(result.best_move.is_none());
    assert_eq!(result.score, -WIN_SCORE);
}

#[test]
fn test_forced_move_returns_without_deepening() {
    // A lone mandatory capture: no tree to search.
    let board = custom(&[(4, 4)], &[(5, 5), (8, 0)], Side::White);
    let mut engine = AlphaBetaEngine::new();
    let result = engine.search(&board, SearchLimits::depth(6));
    assert_eq!(result.nodes, 0);
    assert_eq!(result.depth, 1);
    let mv = result.best_move.unwrap();
    assert!(mv.is_capture);
    assert_eq!(mv.to, sq(6, 6).unwrap());
}

#[test]
fn test_alpha_beta_matches_unpruned_search() {
    // Pruning must never change the root score.
    let positions = [
        Board::startpos(),
        custom(&[(2, 2), (3, 4), (4, 6)], &[(5, 3), (6, 5), (7, 7)], Side::White),
        custom(&[(3, 1), (4, 4)], &[(5, 5), (6, 2)], Side::Black),
    ];
    let config = SearchConfig::default();
    for board in positions {
        for depth in 1..=3 {
            let expected = negamax_plain(&mut board.clone(), depth, config.evaluator);
            let mut tt = TranspositionTable::new(DEFAULT_CAPACITY);
            let mut nodes = 0;
            let (_, score) = search_fixed(
                &mut board.clone(),
                depth,
                -100_000,
                100_000,
                &config,
                &mut tt,
                &mut nodes,
            );
            assert_eq!(score, expected, "depth {depth}");
        }
    }
}

#[test]
fn test_iterative_deepening_matches_fixed_depth() {
    let board = custom(&[(2, 2), (3, 4), (4, 6)], &[(5, 3), (6, 5), (7, 7)], Side::White);
    let config = SearchConfig::default();

    let mut tt = TranspositionTable::new(DEFAULT_CAPACITY);
    let mut nodes = 0;
    let (_, fixed_score) = search_fixed(
        &mut board.clone(),
        4,
        -100_000,
        100_000,
        &config,
        &mut tt,
        &mut nodes,
    );

    let mut engine = AlphaBetaEngine::new();
    let deepened = engine.search(&board, SearchLimits::depth(4));
    assert_eq!(deepened.score, fixed_score);
    assert_eq!(deepened.depth, 4);
}

#[test]
fn test_aspiration_agrees_with_full_window() {
    let board = custom(&[(2, 2), (3, 4), (4, 6)], &[(5, 3), (6, 5), (7, 7)], Side::White);

    let mut plain = AlphaBetaEngine::new();
    let mut aspirating = AlphaBetaEngine::with_config(SearchConfig {
        aspiration: Some(ASPIRATION_DELTA),
        ..SearchConfig::default()
    });

    let a = plain.search(&board, SearchLimits::depth(4));
    let b = aspirating.search(&board, SearchLimits::depth(4));
    assert_eq!(a.score, b.score);
}

#[test]
fn test_competition_engine_avoids_giveaway() {
    // Sliding to e5 gives the piece away; the filter must pick elsewhere.
    let board = custom(&[(3, 4), (0, 0)], &[(5, 5), (8, 8)], Side::White);
    let mut engine = AlphaBetaEngine::competition();
    let result = engine.search(&board, SearchLimits::depth(2));
    let mv = result.best_move.unwrap();
    assert_ne!(mv.to, sq(4, 4).unwrap());
}

#[test]
fn test_zero_time_budget_still_answers() {
    let board = Board::startpos();
    let mut engine = AlphaBetaEngine::new();
    let result = engine.search(&board, SearchLimits::depth_and_time(6, std::time::Duration::ZERO));
    // The clock is checked between depths, so not even depth 1 ran; the
    // first legal move is still returned.
    assert!(result.best_move.is_some());
    assert!(result.stopped);
    assert_eq!(result.depth, 0);
}
