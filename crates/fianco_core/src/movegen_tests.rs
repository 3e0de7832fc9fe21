use super::*;
use crate::board::Board;

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

#[test]
fn test_startpos_moves() {
    // 7 forward pushes from the home row plus 3 moves for each of the 6
    // wedge pieces.
    let moves = legal_moves(&Board::startpos());
    assert_eq!(moves.len(), 25);
}

#[test]
fn test_no_backward_moves() {
    for mv in legal_moves(&Board::startpos()) {
        assert!(row_of(mv.to) >= row_of(mv.from), "white moved backward");
    }

    let mut b = Board::startpos();
    let first = legal_moves(&b)[0];
    b.make_move(first);
    for mv in legal_moves(&b) {
        assert!(row_of(mv.to) <= row_of(mv.from), "black moved backward");
    }
}

#[test]
fn test_capture_is_mandatory() {
    // White could slide in three directions, but the jump over f6 is forced.
    let b = custom(&[(4, 4)], &[(5, 5), (8, 0)], Side::White);
    let moves = legal_moves(&b);
    assert_eq!(
        moves,
        vec![Move::capture(sq(4, 4).unwrap(), sq(6, 6).unwrap())]
    );
}

#[test]
fn test_captures_on_both_diagonals() {
    let b = custom(&[(4, 4)], &[(5, 3), (5, 5), (8, 0)], Side::White);
    let moves = legal_moves(&b);
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| m.is_capture));
}

#[test]
fn test_no_capture_when_landing_occupied() {
    let b = custom(&[(4, 4), (6, 6)], &[(5, 5), (8, 0)], Side::White);
    let moves = legal_moves(&b);
    assert!(moves.iter().all(|m| !m.is_capture));
}

#[test]
fn test_slides_from_edge_stay_on_board() {
    let b = custom(&[(4, 8)], &[(8, 0)], Side::White);
    let moves = legal_moves(&b);
    assert_eq!(moves.len(), 2); // forward and left; no square to the right
}

#[test]
fn test_black_captures_toward_its_target_row() {
    let b = custom(&[(4, 4), (0, 8)], &[(5, 5)], Side::Black);
    let moves = legal_moves(&b);
    assert_eq!(
        moves,
        vec![Move::capture(sq(5, 5).unwrap(), sq(3, 3).unwrap())]
    );
}

#[test]
fn test_stuck_side_has_no_moves() {
    // White's only piece on the left edge, walled in with nothing to jump.
    let b = custom(&[(4, 0)], &[(5, 0), (4, 1)], Side::White);
    assert!(legal_moves(&b).is_empty());
}

#[test]
fn test_suicide_detection() {
    // Sliding to e5 walks into the f6 piece's jump with d4 open behind.
    let b = custom(&[(3, 4)], &[(5, 5), (8, 0)], Side::White);
    let mv = Move::slide(sq(3, 4).unwrap(), sq(4, 4).unwrap());
    assert!(is_suicide(&b, mv, Side::White));

    // With the landing square filled the jump is impossible.
    let b = custom(&[(3, 4), (3, 3)], &[(5, 5), (8, 0)], Side::White);
    let mv = Move::slide(sq(3, 4).unwrap(), sq(4, 4).unwrap());
    assert!(!is_suicide(&b, mv, Side::White));
}
