use crate::{board::Board, movegen::legal_moves_into, types::Move};

/// Pure perft node count over the legal move tree (mandatory-capture
/// semantics included). Decided games and stuck sides are leaves regardless
/// of remaining depth.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 || board.winner().is_some() {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        legal_moves_into(board, buf);
        if buf.is_empty() {
            return 1;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let undo = board.make_move(mv);
            nodes += inner(board, depth - 1, rest);
            board.unmake_move(mv, undo);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, depth, &mut layers[..])
}
