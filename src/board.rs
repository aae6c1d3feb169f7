//! Square board grid, stone colors and the canonical board key.

use std::fmt;

use crate::constants::{CHAR_BLACK, CHAR_EMPTY, CHAR_WHITE};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other player.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// +1 for Black, -1 for White.
    pub fn sign(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

/// Contents of a single intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Numeric value: 1 Black, -1 White, 0 Empty.
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => -1,
        }
    }

    /// Inverse of [`Cell::value`]: positive Black, negative White, zero Empty.
    pub fn from_value(value: i8) -> Cell {
        match value.signum() {
            1 => Cell::Black,
            -1 => Cell::White,
            _ => Cell::Empty,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => CHAR_EMPTY,
            Cell::Black => CHAR_BLACK,
            Cell::White => CHAR_WHITE,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A board coordinate as `(row, col)`.
pub type Point = (usize, usize);

/// An NxN grid of cells stored row-major.
///
/// `Clone` is a deep copy; simulations work on a clone and never alias the
/// live board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Read a cell. Panics if the point is off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.idx(row, col)]
    }

    /// Write a cell. Panics if the point is off the board.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let i = self.idx(row, col);
        self.cells[i] = cell;
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Orthogonal neighbors (north, east, south, west) that lie on the board.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if row > 0 {
            v.push((row - 1, col));
        }
        if col + 1 < s {
            v.push((row, col + 1));
        }
        if row + 1 < s {
            v.push((row + 1, col));
        }
        if col > 0 {
            v.push((row, col - 1));
        }
        v.into_iter()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every point on the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size).flat_map(move |r| (0..self.size).map(move |c| (r, c)))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Canonical key: one character per cell, row-major.
    pub fn serialize(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{col:2} ")?;
        }
        writeln!(f)?;
        write!(f, "  +")?;
        for _ in 0..self.size {
            write!(f, "---")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row:2}|")?;
            for col in 0..self.size {
                write!(f, " {} ", self.get(row, col).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5);
        assert_eq!(board.size(), 5);
        assert_eq!(board.count(Cell::Empty), 25);
        assert_eq!(board.serialize(), ".".repeat(25));
    }

    #[test]
    fn test_set_and_serialize_row_major() {
        let mut board = Board::new(3);
        board.set(0, 1, Cell::Black);
        board.set(2, 0, Cell::White);
        assert_eq!(board.get(0, 1), Cell::Black);
        assert_eq!(board.serialize(), ".X.\n...\nO..".replace('\n', ""));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut board = Board::new(3);
        let copy = board.clone();
        board.set(1, 1, Cell::Black);
        assert_eq!(copy.get(1, 1), Cell::Empty);
        assert_ne!(board, copy);
    }

    #[test]
    fn test_neighbors_at_corner_and_center() {
        let board = Board::new(3);
        let corner: Vec<Point> = board.neighbors(0, 0).collect();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);
        let center: Vec<Point> = board.neighbors(1, 1).collect();
        assert_eq!(center, vec![(0, 1), (1, 2), (2, 1), (1, 0)]);
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.sign(), -1);
        assert_eq!(Cell::from(Color::White).value(), -1);
        assert_eq!(Cell::Black.color(), Some(Color::Black));
        for cell in [Cell::Empty, Cell::Black, Cell::White] {
            assert_eq!(Cell::from_value(cell.value()), cell);
        }
    }

    #[test]
    fn test_display_has_indices() {
        let mut board = Board::new(2);
        board.set(1, 0, Cell::Black);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    0  1 ");
        assert_eq!(lines[1], "  +------");
        assert_eq!(lines[2], " 0| .  . ");
        assert_eq!(lines[3], " 1| X  . ");
    }
}
