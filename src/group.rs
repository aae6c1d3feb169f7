//! Group (block) and liberty analysis.
//!
//! A flood fill from a seed stone over 4-connected neighbors collects the
//! whole block of same-colored stones and the empty points adjacent to it.
//! Visited state lives in side tables, so the board is only read: there is
//! nothing to restore afterwards.

use crate::board::{Board, Cell, Color, Point};

/// A connected block of stones and its liberties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    /// Every stone of the block, each listed once.
    pub stones: Vec<Point>,
    /// Every empty point adjacent to the block, each listed once.
    pub liberties: Vec<Point>,
}

impl Group {
    pub fn size(&self) -> usize {
        self.stones.len()
    }

    pub fn is_captured(&self) -> bool {
        self.liberties.is_empty()
    }
}

/// Collect the block containing `(row, col)` and its liberties.
///
/// If the seed point does not hold a `color` stone the result is empty.
pub fn analyze(board: &Board, row: usize, col: usize, color: Color) -> Group {
    let mut visited = vec![false; board.size() * board.size()];
    analyze_with(board, row, col, color, &mut visited)
}

/// Like [`analyze`] but reuses a caller-owned visited table, so a scan can
/// skip stones already covered by an earlier block.
///
/// `visited` must hold `size * size` entries. Stones of the returned block
/// are marked; liberties are tracked in a local table and left unmarked.
pub(crate) fn analyze_with(
    board: &Board,
    row: usize,
    col: usize,
    color: Color,
    visited: &mut [bool],
) -> Group {
    let size = board.size();
    let stone = Cell::from(color);
    let mut group = Group::default();

    if board.get(row, col) != stone || visited[row * size + col] {
        return group;
    }

    let mut liberty_seen = vec![false; size * size];
    let mut stack = vec![(row, col)];
    visited[row * size + col] = true;

    while let Some((r, c)) = stack.pop() {
        group.stones.push((r, c));
        for (nr, nc) in board.neighbors(r, c) {
            let ni = nr * size + nc;
            match board.get(nr, nc) {
                Cell::Empty => {
                    if !liberty_seen[ni] {
                        liberty_seen[ni] = true;
                        group.liberties.push((nr, nc));
                    }
                }
                cell if cell == stone && !visited[ni] => {
                    visited[ni] = true;
                    stack.push((nr, nc));
                }
                _ => {}
            }
        }
    }
    group
}
