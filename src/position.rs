//! Game state and move execution.
//!
//! [`GameState`] holds everything one game needs: board, side to move,
//! prisoners, positional history and pass tracking. Many independent games
//! can run side by side since nothing here is shared.
//!
//! [`apply_move`] commits a move that the caller has already validated with
//! [`crate::rules::is_legal`]; [`play`] does both steps.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::board::{Board, Cell, Color, Point};
use crate::capture::{CaptureReport, Captures, resolve_captures};
use crate::constants::{COLUMN_LETTERS, MAX_BOARD_SIZE};
use crate::rules::{MoveError, check_move};

/// A move: a stone placement at `(row, col)` or a pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place(usize, usize),
    Pass,
}

impl Move {
    pub fn is_pass(self) -> bool {
        self == Move::Pass
    }

    pub fn point(self) -> Option<Point> {
        match self {
            Move::Place(r, c) => Some((r, c)),
            Move::Pass => None,
        }
    }
}

impl From<Point> for Move {
    fn from((row, col): Point) -> Self {
        Move::Place(row, col)
    }
}

/// The state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    /// Side expected to move next.
    pub to_move: Color,
    pub captures: Captures,
    /// Compensation points for White.
    pub komi: f64,
    history: Vec<String>,
    seen: HashSet<String>,
    consecutive_passes: u32,
}

impl GameState {
    pub fn new(board_size: usize, komi: f64) -> Self {
        Self {
            board: Board::new(board_size),
            to_move: Color::Black,
            captures: Captures::default(),
            komi,
            history: Vec::new(),
            seen: HashSet::new(),
            consecutive_passes: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Serialized boards after every committed move, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Number of committed moves, passes included.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Whether `key` matches any earlier position.
    pub fn has_occurred(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    /// Whether the most recent committed move was a pass.
    pub fn previous_was_pass(&self) -> bool {
        self.consecutive_passes > 0
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    pub(crate) fn record_position(&mut self) {
        let key = self.board.serialize();
        self.seen.insert(key.clone());
        self.history.push(key);
    }
}

/// Start a game on an empty `board_size` board.
pub fn new_game(board_size: usize, komi: f64) -> GameState {
    GameState::new(board_size, komi)
}

/// Commit `mv` for `color`.
///
/// The move must already be legal; this is checked in debug builds only.
/// Returns the captures it caused.
pub fn apply_move(state: &mut GameState, mv: Move, color: Color) -> CaptureReport {
    debug_assert!(
        check_move(state, mv, color).is_ok(),
        "apply_move called with illegal move {mv} for {color}"
    );

    let report = match mv {
        Move::Pass => {
            state.consecutive_passes += 1;
            CaptureReport::default()
        }
        Move::Place(row, col) => {
            state.board.set(row, col, Cell::from(color));
            state.consecutive_passes = 0;
            resolve_captures(&mut state.board, color.opponent(), &mut state.captures)
        }
    };

    state.record_position();
    state.to_move = color.opponent();
    trace!(%color, %mv, prisoners = report.stones, "move applied");
    report
}

/// Validate and commit `mv` for `color`.
pub fn play(state: &mut GameState, mv: Move, color: Color) -> Result<CaptureReport, MoveError> {
    check_move(state, mv, color)?;
    Ok(apply_move(state, mv, color))
}

// =============================================================================
// Vertex notation
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("empty vertex")]
    Empty,
    #[error("bad column in vertex {0:?}")]
    Column(String),
    #[error("bad row in vertex {0:?}")]
    Row(String),
    #[error("vertex {vertex:?} is off a {size}x{size} board")]
    OffBoard { vertex: String, size: usize },
}

/// Parse a vertex such as `"D4"` or `"pass"` for a `size` board.
///
/// Columns are letters A-Z without I; row 1 is the bottom row, which is the
/// last row of the grid.
pub fn parse_vertex(s: &str, size: usize) -> Result<Move, CoordError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(CoordError::Empty);
    }
    if s.eq_ignore_ascii_case("pass") {
        return Ok(Move::Pass);
    }

    let bytes = s.as_bytes();
    let col_char = bytes[0].to_ascii_uppercase();
    let col = COLUMN_LETTERS
        .iter()
        .position(|&b| b == col_char)
        .ok_or_else(|| CoordError::Column(s.to_string()))?;

    let row_num: usize = s[1..]
        .parse()
        .map_err(|_| CoordError::Row(s.to_string()))?;

    if row_num == 0 || row_num > size || col >= size {
        return Err(CoordError::OffBoard {
            vertex: s.to_string(),
            size,
        });
    }
    Ok(Move::Place(size - row_num, col))
}

/// Parse either vertex notation (`"D4"`, `"pass"`) or `"row,col"`.
///
/// Coordinates given as `row,col` must lie on the board.
pub fn parse_move(s: &str, size: usize) -> Result<Move, CoordError> {
    if s.contains(',') {
        let mv: Move = s.parse()?;
        if let Move::Place(row, col) = mv {
            if row >= size || col >= size {
                return Err(CoordError::OffBoard {
                    vertex: s.trim().to_string(),
                    size,
                });
            }
        }
        return Ok(mv);
    }
    parse_vertex(s, size)
}

/// Format a move as a vertex for a `size` board (`"pass"` for passes).
pub fn vertex_string(mv: Move, size: usize) -> String {
    match mv {
        Move::Pass => "pass".into(),
        Move::Place(row, col) if row < size && col < size && col < MAX_BOARD_SIZE => {
            format!("{}{}", COLUMN_LETTERS[col] as char, size - row)
        }
        Move::Place(row, col) => format!("({row},{col})"),
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pass => f.write_str("pass"),
            Move::Place(r, c) => write!(f, "({r},{c})"),
        }
    }
}

impl FromStr for Move {
    type Err = CoordError;

    /// Parses `"pass"` or `"row,col"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('(').trim_end_matches(')');
        if s.is_empty() {
            return Err(CoordError::Empty);
        }
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Move::Pass);
        }
        let (r, c) = s
            .split_once(',')
            .ok_or_else(|| CoordError::Row(s.to_string()))?;
        let row = r.trim().parse().map_err(|_| CoordError::Row(s.to_string()))?;
        let col = c
            .trim()
            .parse()
            .map_err(|_| CoordError::Column(s.to_string()))?;
        Ok(Move::Place(row, col))
    }
}
