//! Move-generator validation via perft counts.

use fianco_core::{perft, sq, Board, Side};

#[test]
fn test_perft_startpos_depth_1() {
    let mut b = Board::startpos();
    assert_eq!(perft(&mut b, 1), 25);
}

#[test]
fn test_perft_startpos_depth_2() {
    // 25 white moves; two of them (d4-d5 and f4-f5) block one black push,
    // leaving black 24 replies instead of 25.
    let mut b = Board::startpos();
    assert_eq!(perft(&mut b, 2), 623);
}

#[test]
fn test_perft_leaves_board_untouched() {
    let mut b = Board::startpos();
    let before = b.clone();
    perft(&mut b, 3);
    assert_eq!(b, before);
}

#[test]
fn test_perft_forced_capture_line() {
    let mut b = Board::empty(Side::White);
    b.set_piece(sq(4, 4).unwrap(), Some(Side::White));
    b.set_piece(sq(5, 5).unwrap(), Some(Side::Black));
    b.set_piece(sq(8, 0).unwrap(), Some(Side::Black));
    // Only the mandatory jump is legal at the root.
    assert_eq!(perft(&mut b, 1), 1);
}
