use crate::{board::Board, types::*};

/// Generate all legal moves for the side to move, returning a freshly
/// allocated vector. Delegates to `legal_moves_into`.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across
/// calls. Per piece: two forward-diagonal jump-captures, then the three
/// plain slides (forward, left, right) into empty cells; backward is never
/// legal. Capturing is mandatory — the instant any capture is found, every
/// plain move already collected is discarded and only captures are kept.
pub fn legal_moves_into(board: &Board, out: &mut Vec<Move>) {
    out.clear();
    let side = board.side_to_move;
    let enemy = side.other();
    let dr = side.forward();
    let mut capture_only = false;

    for from in 0..NUM_SQUARES as u8 {
        if board.piece_at(from) != Some(side) {
            continue;
        }
        let r = row_of(from);
        let c = col_of(from);

        for dc in [-1i8, 1] {
            let over = sq(r + dr, c + dc);
            let land = sq(r + 2 * dr, c + 2 * dc);
            if let (Some(over), Some(land)) = (over, land) {
                if board.piece_at(over) == Some(enemy) && board.piece_at(land).is_none() {
                    if !capture_only {
                        out.clear();
                        capture_only = true;
                    }
                    out.push(Move::capture(from, land));
                }
            }
        }
        if capture_only {
            continue;
        }

        for (sr, sc) in [(dr, 0), (0, -1), (0, 1)] {
            if let Some(to) = sq(r + sr, c + sc) {
                if board.piece_at(to).is_none() {
                    out.push(Move::slide(from, to));
                }
            }
        }
    }
}

/// Whether a piece of `side` standing on `at` could be jumped right now:
/// an enemy piece sits on one of its forward diagonals and the opposite
/// diagonal behind it is an empty landing square.
pub fn is_exposed(board: &Board, at: u8, side: Side) -> bool {
    let r = row_of(at);
    let c = col_of(at);
    let d = side.forward();
    let enemy = side.other();
    for dc in [-1i8, 1] {
        let attacker = sq(r + d, c + dc);
        let landing = sq(r - d, c - dc);
        if let (Some(a), Some(l)) = (attacker, landing) {
            if board.piece_at(a) == Some(enemy) && board.piece_at(l).is_none() {
                return true;
            }
        }
    }
    false
}

/// Whether playing `mv` would park the piece where it is immediately
/// jumpable. Evaluated on the pre-move board: exact for slides (the vacated
/// square is never the counter-jump's attacker or landing square), and a
/// close approximation for jumps. Used by the competition search to prune
/// giveaway moves.
pub fn is_suicide(board: &Board, mv: Move, side: Side) -> bool {
    is_exposed(board, mv.to, side)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
