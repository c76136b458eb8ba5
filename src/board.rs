//! Game board representation and collision detection

use crate::piece::Piece;
use crate::tetromino::TetrominoType;

/// Standard board dimensions
pub const BOARD_HEIGHT: i32 = 20;
pub const BOARD_WIDTH: i32 = 10;

/// A cell on the board - either empty or locked with a piece type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(TetrominoType),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// The playfield. Row 0 is the top, rows grow downward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Grid stored as [row][col]
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create an empty board. Dimensions are validated by the caller.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![Cell::Empty; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at `(x, y)`; None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        let (x, y) = self.index(x, y)?;
        Some(self.cells[y][x])
    }

    /// Set the cell at `(x, y)`; returns false if out of bounds
    pub(crate) fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some((x, y)) => {
                self.cells[y][x] = cell;
                true
            }
            None => false,
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.cols && y < self.rows).then_some((x, y))
    }

    /// Iterate rows top to bottom
    pub fn row_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// True if any cell is left or right of the walls or below the floor.
    /// Cells above the grid are never out of bounds.
    pub fn exceeds_walls(&self, piece: &Piece) -> bool {
        piece
            .occupied_cells()
            .iter()
            .any(|&(x, y)| y >= self.rows as i32 || x < 0 || x >= self.cols as i32)
    }

    /// True if any in-grid cell lands on a locked cell
    pub fn intersects(&self, piece: &Piece) -> bool {
        piece
            .occupied_cells()
            .iter()
            .any(|&(x, y)| self.get(x, y).is_some_and(|cell| cell.is_filled()))
    }

    /// Check if a piece may occupy its current position
    pub fn is_valid(&self, piece: &Piece) -> bool {
        !self.exceeds_walls(piece) && !self.intersects(piece)
    }

    /// Lock a piece onto the board
    pub(crate) fn lock_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.occupied_cells() {
            self.set(x, y, Cell::Filled(piece.piece_type));
        }
    }

    /// Remove full rows, prepend as many empty rows, and return the count
    pub(crate) fn clear_lines(&mut self) -> usize {
        let before = self.cells.len();
        self.cells.retain(|row| !row.iter().all(Cell::is_filled));
        let cleared = before - self.cells.len();

        let mut rebuilt = vec![vec![Cell::Empty; self.cols]; cleared];
        rebuilt.append(&mut self.cells);
        self.cells = rebuilt;

        cleared
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.row_iter()
            .map(|row| row.iter().filter(|cell| cell.is_filled()).count())
            .sum()
    }

    /// Check if the board is completely empty
    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }
}
