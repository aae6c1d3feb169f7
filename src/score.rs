//! Scoring and end-of-game detection.
//!
//! Score is stones on the board plus prisoners, with komi for White:
//!
//! ```text
//! score = (black stones + black captures) - (white stones + white captures + komi)
//! ```
//!
//! Positive favors Black.

use tracing::debug;

use crate::board::{Cell, Color};
use crate::constants::{FULL_BOARD_EMPTY_THRESHOLD, PASSES_TO_END};
use crate::position::{GameState, Move};
use crate::rules::has_legal_move;

/// End-of-game verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    /// Winner once the game is over, `None` while it continues.
    pub winner: Option<Color>,
    pub over: bool,
}

impl Terminal {
    const ONGOING: Terminal = Terminal {
        winner: None,
        over: false,
    };

    /// 1 Black won, -1 White won, 0 game still running.
    pub fn winner_sign(&self) -> i8 {
        self.winner.map_or(0, Color::sign)
    }
}

pub fn compute_score(state: &GameState) -> f64 {
    let points = |color: Color| {
        state.board.count(Cell::from(color)) as f64 + state.captures.of(color) as f64
    };
    points(Color::Black) - points(Color::White) - state.komi
}

/// Winner by sign of the score. A score of zero goes to White.
pub fn winner(state: &GameState) -> Color {
    if compute_score(state) > 0.0 {
        Color::Black
    } else {
        Color::White
    }
}

/// True once fewer than [`FULL_BOARD_EMPTY_THRESHOLD`] empty points remain.
///
/// Deliberately loose: a board with one or two holes already counts as full.
pub fn is_board_full(state: &GameState) -> bool {
    state.board.count(Cell::Empty) < FULL_BOARD_EMPTY_THRESHOLD
}

/// Decide whether the game ended with `last_move`.
///
/// The game is over after two passes in a row, on a full board, or when
/// neither side has a legal placement left. A point can never be suicide
/// for both colors, so the last case only arises when superko blocks
/// every empty point.
pub fn is_terminal(state: &GameState, last_move: Move) -> Terminal {
    let double_pass = last_move.is_pass() && state.consecutive_passes() >= PASSES_TO_END;
    let reason = if double_pass {
        "double pass"
    } else if is_board_full(state) {
        "board full"
    } else if !has_legal_move(state, Color::Black) && !has_legal_move(state, Color::White) {
        "no legal moves"
    } else {
        return Terminal::ONGOING;
    };

    let score = compute_score(state);
    let winner = winner(state);
    debug!(reason, score, %winner, "game over");
    Terminal {
        winner: Some(winner),
        over: true,
    }
}

/// Score plus a termination flag for a position, without a last move.
///
/// Terminated when the board is full or either side is out of legal
/// placements.
pub fn value_and_terminated(state: &GameState) -> (f64, bool) {
    let terminated = is_board_full(state)
        || !has_legal_move(state, Color::Black)
        || !has_legal_move(state, Color::White);
    (compute_score(state), terminated)
}
