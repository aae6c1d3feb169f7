//! Tensor encoding and action indexing for external evaluators.

use crate::board::{Board, Cell, Color, Point};
use crate::constants::{ENCODED_PLANES, PLANE_BLACK, PLANE_EMPTY, PLANE_WHITE};
use crate::position::GameState;

/// Encode the board as three binary planes, `[white, empty, black]`.
///
/// The result is a flat `3 x N x N` buffer, plane-major then row-major.
/// Every point has exactly one plane set to 1.0.
pub fn encode(board: &Board) -> Vec<f32> {
    let area = board.size() * board.size();
    let mut out = vec![0.0; ENCODED_PLANES * area];
    for (i, cell) in board.cells().iter().enumerate() {
        let plane = match cell {
            Cell::White => PLANE_WHITE,
            Cell::Empty => PLANE_EMPTY,
            Cell::Black => PLANE_BLACK,
        };
        out[plane * area + i] = 1.0;
    }
    out
}

/// Multiply every cell by the sign of `color`.
///
/// For White this swaps the colors, so the side to move always looks like
/// Black to a color-agnostic evaluator. For Black it is a copy.
pub fn flip_perspective(board: &Board, color: Color) -> Board {
    let mut out = board.clone();
    for (r, c) in board.points() {
        out.set(r, c, Cell::from_value(board.get(r, c).value() * color.sign()));
    }
    out
}

/// [`encode`] applied to the board of `state`.
pub fn encode_state(state: &GameState) -> Vec<f32> {
    encode(&state.board)
}

/// A copy of `state` with its board seen from `color`'s side.
///
/// Only the stones are flipped; prisoners, komi and history are copied
/// unchanged.
pub fn flip_state_perspective(state: &GameState, color: Color) -> GameState {
    let mut out = state.clone();
    out.board = flip_perspective(&state.board, color);
    out
}

/// Row-major action index of `(row, col)` on a `size` board.
pub fn move_to_flat_index(row: usize, col: usize, size: usize) -> usize {
    row * size + col
}

/// Inverse of [`move_to_flat_index`].
pub fn flat_index_to_move(index: usize, size: usize) -> Point {
    (index / size, index % size)
}
