use super::*;
use crate::types::sq;

const STARTPOS_GRID: &str =
    "111111111/010000010/002000200/000101000/000000000/000202000/002000200/020000020/222222222";

#[test]
fn test_parse_grid_startpos() {
    let b = parse_grid(STARTPOS_GRID, Side::White).unwrap();
    assert_eq!(b, Board::startpos());
}

#[test]
fn test_grid_text_roundtrip() {
    let b = Board::startpos();
    assert_eq!(b, parse_grid(&grid_to_text(&b), Side::White).unwrap());
}

#[test]
fn test_parse_grid_errors() {
    assert_eq!(
        parse_grid("000000000/000000000", Side::White),
        Err(ProtocolError::WrongRowCount(2))
    );
    let short = "111111111/010000010/002000200/000101000/0000/000202000/002000200/020000020/222222222";
    assert_eq!(
        parse_grid(short, Side::White),
        Err(ProtocolError::WrongColCount { row: 4, cols: 4 })
    );
    let bad = STARTPOS_GRID.replacen('0', "9", 1);
    assert_eq!(parse_grid(&bad, Side::White), Err(ProtocolError::BadDigit('9')));
}

#[test]
fn test_move_text_roundtrip() {
    let b = Board::startpos();
    for mv in legal_moves(&b) {
        let txt = move_to_text(mv);
        assert_eq!(parse_text_move(&b, &txt).unwrap(), mv);
    }
}

#[test]
fn test_capture_notation() {
    let mut b = Board::empty(Side::White);
    b.set_piece(sq(4, 4).unwrap(), Some(Side::White));
    b.set_piece(sq(5, 5).unwrap(), Some(Side::Black));
    b.set_piece(sq(8, 0).unwrap(), Some(Side::Black));

    let mv = parse_text_move(&b, "e5xg7").unwrap();
    assert!(mv.is_capture);
    assert_eq!(move_to_text(mv), "e5xg7");

    // A slide is not legal while the jump is available.
    assert_eq!(
        parse_text_move(&b, "e5-e6"),
        Err(ProtocolError::IllegalMove("e5-e6".to_string()))
    );
}

#[test]
fn test_parse_rejects_garbage() {
    let b = Board::startpos();
    assert!(matches!(
        parse_text_move(&b, "zz9"),
        Err(ProtocolError::BadSquare(_))
    ));
    assert_eq!(parse_side("x"), Err(ProtocolError::BadSide("x".to_string())));
    assert_eq!(parse_side("w").unwrap(), Side::White);
    assert_eq!(parse_side("black").unwrap(), Side::Black);
}
