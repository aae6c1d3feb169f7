//! Move legality.
//!
//! A placement is simulated on a scratch copy of the board: the stone goes
//! down, dead opponent blocks are removed, then the result is checked
//! against positional superko and suicide. The live state is never touched.

use thiserror::Error;
use tracing::debug;

use crate::board::{Cell, Color};
use crate::capture::{Captures, resolve_captures};
use crate::position::{GameState, Move};

/// Why a move is illegal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move: ({0},{1}) is off the board")]
    OutOfBounds(usize, usize),
    #[error("illegal move: ({0},{1}) is not empty")]
    Occupied(usize, usize),
    #[error("illegal move: repeats an earlier position")]
    Superko,
    #[error("illegal move: suicide")]
    Suicide,
}

/// Check `mv` for `color`, returning the first rule it breaks.
///
/// Checks run in order: bounds, occupancy, superko, suicide. A pass is
/// always accepted here; ending the game on passes is a scoring concern.
pub fn check_move(state: &GameState, mv: Move, color: Color) -> Result<(), MoveError> {
    let (row, col) = match mv {
        Move::Pass => return Ok(()),
        Move::Place(row, col) => (row, col),
    };

    if !state.board.contains(row, col) {
        return Err(MoveError::OutOfBounds(row, col));
    }
    if !state.board.get(row, col).is_empty() {
        return Err(MoveError::Occupied(row, col));
    }

    let mut scratch = state.board.clone();
    let mut tally = Captures::default();
    scratch.set(row, col, Cell::from(color));
    let enemy = resolve_captures(&mut scratch, color.opponent(), &mut tally);

    if state.has_occurred(&scratch.serialize()) {
        return Err(MoveError::Superko);
    }

    if !enemy.captured && resolve_captures(&mut scratch, color, &mut tally).captured {
        return Err(MoveError::Suicide);
    }
    Ok(())
}

/// Whether `color` may play `mv` in `state`.
pub fn is_legal(state: &GameState, mv: Move, color: Color) -> bool {
    match check_move(state, mv, color) {
        Ok(()) => true,
        Err(err) => {
            debug!(%color, %mv, %err, "move rejected");
            false
        }
    }
}

/// All legal stone placements for `color`, row-major. Pass is not listed.
pub fn legal_moves(state: &GameState, color: Color) -> Vec<Move> {
    state
        .board
        .points()
        .map(Move::from)
        .filter(|&mv| check_move(state, mv, color).is_ok())
        .collect()
}

/// Legality mask over all points in row-major order: 1 legal, 0 not.
pub fn valid_move_mask(state: &GameState, color: Color) -> Vec<u8> {
    state
        .board
        .points()
        .map(|p| u8::from(check_move(state, Move::from(p), color).is_ok()))
        .collect()
}

/// Whether `color` has any legal stone placement.
pub fn has_legal_move(state: &GameState, color: Color) -> bool {
    state
        .board
        .points()
        .any(|p| check_move(state, Move::from(p), color).is_ok())
}
