//! UCT tree search.
//!
//! Nodes live in one arena (`Vec<Node>`) and refer to each other by index:
//! children are owned through the index list, the parent link is a plain
//! index used only for backpropagation, and no ownership cycles exist.

use fianco_core::{legal_moves, Board, Move, Side};
use rand::Rng;

/// Exploration constant inside the UCT square root:
/// `win_rate + sqrt(EXPLORATION * ln(parent_visits) / child_visits)`.
const EXPLORATION: f64 = 2.0;

/// Playouts that shuffle past this many plies count as half a win.
pub(crate) const MAX_PLAYOUT_PLIES: u32 = 512;

struct Node {
    board: Board,
    incoming: Option<Move>,
    parent: Option<usize>,
    children: Vec<usize>,
    visits: u32,
    /// Wins accumulated from the perspective of the side that moved into
    /// this node (draws count one half).
    wins: f64,
}

impl Node {
    fn new(board: Board, incoming: Option<Move>, parent: Option<usize>) -> Self {
        Self {
            board,
            incoming,
            parent,
            children: Vec::new(),
            visits: 0,
            wins: 0.0,
        }
    }
}

pub struct UctSearch {
    nodes: Vec<Node>,
    iterations: u32,
}

impl UctSearch {
    pub fn new(iterations: u32) -> Self {
        Self {
            nodes: Vec::new(),
            iterations,
        }
    }

    /// Number of tree nodes allocated by the last `run`.
    pub fn tree_size(&self) -> usize {
        self.nodes.len()
    }

    /// Pick a move for `board.side_to_move`, or `None` when the side has no
    /// legal moves. With zero iterations (or a terminal root) this falls
    /// back to the first generated legal move.
    pub fn run(&mut self, board: &Board, rng: &mut impl Rng) -> Option<Move> {
        let root_moves = legal_moves(board);
        let fallback = root_moves.first().copied()?;

        self.nodes = vec![Node::new(board.clone(), None, None)];
        for _ in 0..self.iterations {
            let leaf = self.select(0);
            if let Some(winner) = terminal_winner(&self.nodes[leaf].board) {
                self.backpropagate(leaf, Some(winner));
            } else {
                let child = self.expand(leaf, rng);
                let result = self.simulate(child, rng);
                self.backpropagate(child, result);
            }
        }

        // Most-visited root child; the fallback covers an unexpanded root.
        self.nodes[0]
            .children
            .iter()
            .max_by_key(|&&c| self.nodes[c].visits)
            .and_then(|&c| self.nodes[c].incoming)
            .or(Some(fallback))
    }

    /// Descend while the node has children, taking the best UCT child.
    /// Unvisited children are taken immediately; ties go to the first found.
    fn select(&self, mut idx: usize) -> usize {
        while !self.nodes[idx].children.is_empty() {
            let parent_visits = self.nodes[idx].visits.max(1);
            let ln_parent = (parent_visits as f64).ln();
            let mut best = self.nodes[idx].children[0];
            let mut best_value = f64::NEG_INFINITY;
            for &child in &self.nodes[idx].children {
                let node = &self.nodes[child];
                let value = if node.visits == 0 {
                    f64::INFINITY
                } else {
                    node.wins / node.visits as f64
                        + (EXPLORATION * ln_parent / node.visits as f64).sqrt()
                };
                if value > best_value {
                    best_value = value;
                    best = child;
                }
            }
            idx = best;
        }
        idx
    }

    /// Attach every legal child of `idx` and return a random one to
    /// simulate from. A leaf with no moves stays a leaf and is returned.
    fn expand(&mut self, idx: usize, rng: &mut impl Rng) -> usize {
        let moves = legal_moves(&self.nodes[idx].board);
        if moves.is_empty() {
            return idx;
        }
        let first_child = self.nodes.len();
        for mv in moves {
            let mut board = self.nodes[idx].board.clone();
            board.make_move(mv);
            self.nodes.push(Node::new(board, Some(mv), Some(idx)));
        }
        let last = self.nodes.len();
        self.nodes[idx].children.extend(first_child..last);
        rng.gen_range(first_child..last)
    }

    /// Uniformly random playout on an owned copy. `None` means the ply cap
    /// hit and the game is scored a draw.
    fn simulate(&self, idx: usize, rng: &mut impl Rng) -> Option<Side> {
        let mut board = self.nodes[idx].board.clone();
        for _ in 0..MAX_PLAYOUT_PLIES {
            if let Some(winner) = terminal_winner(&board) {
                return Some(winner);
            }
            let moves = legal_moves(&board);
            board.make_move(moves[rng.gen_range(0..moves.len())]);
        }
        None
    }

    /// Walk the parent chain crediting each node from the perspective of
    /// the side that moved into it.
    fn backpropagate(&mut self, mut idx: usize, winner: Option<Side>) {
        loop {
            let node = &mut self.nodes[idx];
            node.visits += 1;
            node.wins += match winner {
                Some(w) => {
                    if w == node.board.side_to_move.other() {
                        1.0
                    } else {
                        0.0
                    }
                }
                None => 0.5,
            };
            match node.parent {
                Some(p) => idx = p,
                None => break,
            }
        }
    }
}

/// A decided position: a reached home row, an eliminated side, or a stuck
/// side to move (which loses).
fn terminal_winner(board: &Board) -> Option<Side> {
    if let Some(w) = board.winner() {
        return Some(w);
    }
    if legal_moves(board).is_empty() {
        return Some(board.side_to_move.other());
    }
    None
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
