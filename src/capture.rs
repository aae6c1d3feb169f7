//! Capture resolution.
//!
//! [`resolve_captures`] removes every block of one color that has no
//! liberties. Scanning the opponent after a placement performs real
//! captures; scanning the mover's own color on a scratch board detects
//! suicide.

use tracing::trace;

use crate::board::{Board, Cell, Color};
use crate::group::analyze_with;

/// Prisoners taken by each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Captures {
    /// White stones captured by Black.
    pub black: u32,
    /// Black stones captured by White.
    pub white: u32,
}

impl Captures {
    pub fn of(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    fn credit(&mut self, color: Color, stones: u32) {
        match color {
            Color::Black => self.black += stones,
            Color::White => self.white += stones,
        }
    }
}

/// Outcome of one capture scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureReport {
    /// One-shot flag: raised by the first captured block of the scan and
    /// never lowered within it. Later blocks are still removed.
    pub captured: bool,
    /// Blocks removed.
    pub groups: u32,
    /// Stones removed.
    pub stones: u32,
}

/// Remove all `color` blocks without liberties.
///
/// Removed stones are credited to the opponent of `color` in `captures`.
pub fn resolve_captures(board: &mut Board, color: Color, captures: &mut Captures) -> CaptureReport {
    let size = board.size();
    let stone = Cell::from(color);
    let mut visited = vec![false; size * size];
    let mut report = CaptureReport::default();

    for row in 0..size {
        for col in 0..size {
            if board.get(row, col) != stone || visited[row * size + col] {
                continue;
            }
            let group = analyze_with(board, row, col, color, &mut visited);
            if !group.is_captured() {
                continue;
            }

            for &(r, c) in &group.stones {
                board.set(r, c, Cell::Empty);
            }
            let prisoners = group.size() as u32;
            captures.credit(color.opponent(), prisoners);
            trace!(%color, row, col, prisoners, "captured block");

            report.captured = true;
            report.groups += 1;
            report.stones += prisoners;
        }
    }
    report
}
