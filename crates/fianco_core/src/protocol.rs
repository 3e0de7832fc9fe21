//! Text encoding of boards and moves for the line-protocol front-ends.
//!
//! Squares are named with files `a..i` and ranks `1..9` (rank 1 is White's
//! home row). Moves read `e2-e3` for slides and `c3xe5` for jumps; grids are
//! nine `/`-separated rows of nine `0`/`1`/`2` digits, row 1 first.

use crate::board::{Board, BoardError};
use crate::movegen::legal_moves;
use crate::types::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("expected 9 grid rows, got {0}")]
    WrongRowCount(usize),
    #[error("grid row {row} has {cols} cells, expected 9")]
    WrongColCount { row: usize, cols: usize },
    #[error("invalid occupant digit '{0}'")]
    BadDigit(char),
    #[error("invalid square '{0}'")]
    BadSquare(String),
    #[error("'{0}' is not a legal move in this position")]
    IllegalMove(String),
    #[error("invalid side '{0}', expected 'w' or 'b'")]
    BadSide(String),
    #[error(transparent)]
    Board(#[from] BoardError),
}

pub fn move_to_text(mv: Move) -> String {
    let sep = if mv.is_capture { 'x' } else { '-' };
    format!("{}{}{}", sq_to_coord(mv.from), sep, sq_to_coord(mv.to))
}

/// Parse a move in `e2-e3` / `c3xe5` / `e2e3` form and match it against the
/// legal moves of the position so the capture flag is always right.
pub fn parse_text_move(board: &Board, txt: &str) -> Result<Move, ProtocolError> {
    let compact: String = txt.chars().filter(|&c| c != '-' && c != 'x').collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ProtocolError::BadSquare(txt.to_string()));
    }
    let from =
        coord_to_sq(&compact[0..2]).ok_or_else(|| ProtocolError::BadSquare(txt.to_string()))?;
    let to =
        coord_to_sq(&compact[2..4]).ok_or_else(|| ProtocolError::BadSquare(txt.to_string()))?;

    legal_moves(board)
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .ok_or_else(|| ProtocolError::IllegalMove(txt.to_string()))
}

pub fn parse_side(txt: &str) -> Result<Side, ProtocolError> {
    match txt {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        other => Err(ProtocolError::BadSide(other.to_string())),
    }
}

/// Parse `rrrrrrrrr/.../rrrrrrrrr` into a board for `side_to_move`.
pub fn parse_grid(txt: &str, side_to_move: Side) -> Result<Board, ProtocolError> {
    let rows: Vec<&str> = txt.split('/').collect();
    if rows.len() != 9 {
        return Err(ProtocolError::WrongRowCount(rows.len()));
    }
    let mut grid = [[0u8; 9]; 9];
    for (row, row_txt) in rows.iter().enumerate() {
        if row_txt.chars().count() != 9 {
            return Err(ProtocolError::WrongColCount {
                row,
                cols: row_txt.chars().count(),
            });
        }
        for (col, ch) in row_txt.chars().enumerate() {
            grid[row][col] = match ch.to_digit(10) {
                Some(d) if d <= 2 => d as u8,
                _ => return Err(ProtocolError::BadDigit(ch)),
            };
        }
    }
    Ok(Board::from_grid(&grid, side_to_move)?)
}

pub fn grid_to_text(board: &Board) -> String {
    board
        .to_grid()
        .iter()
        .map(|row| row.iter().map(|d| d.to_string()).collect::<String>())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
