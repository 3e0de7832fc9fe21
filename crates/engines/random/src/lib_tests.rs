use super::*;
use fianco_core::{sq, Side};

#[test]
fn random_engine_returns_legal_move() {
    let board = Board::startpos();
    let mut engine = RandomEngine::new();
    for _ in 0..20 {
        let result = engine.search(&board, SearchLimits::depth(1));
        let mv = result.best_move.unwrap();
        assert!(legal_moves(&board).contains(&mv));
    }
}

#[test]
fn random_engine_respects_mandatory_capture() {
    let mut board = Board::empty(Side::White);
    board.set_piece(sq(4, 4).unwrap(), Some(Side::White));
    board.set_piece(sq(5, 5).unwrap(), Some(Side::Black));
    board.set_piece(sq(8, 0).unwrap(), Some(Side::Black));

    let mut engine = RandomEngine::new();
    let result = engine.search(&board, SearchLimits::depth(1));
    assert!(result.best_move.unwrap().is_capture);
}

#[test]
fn random_engine_signals_stuck_side() {
    let mut board = Board::empty(Side::White);
    board.set_piece(sq(4, 0).unwrap(), Some(Side::White));
    board.set_piece(sq(5, 0).unwrap(), Some(Side::Black));
    board.set_piece(sq(4, 1).unwrap(), Some(Side::Black));

    let mut engine = RandomEngine::new();
    let result = engine.search(&board, SearchLimits::depth(1));
    assert!(result.best_move.is_none());
}
