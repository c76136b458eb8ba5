//! Read-only view of a game for renderers and logs

use crate::board::Cell;
use crate::game::{Game, GameState};
use crate::piece::Piece;
use crate::randomizer::Randomizer;
use crate::tetromino::{TetrominoType, offset_to_xy};
use serde::Serialize;

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub rows: usize,
    pub cols: usize,
    /// Locked cells, top row first; `None` is empty
    pub grid: Vec<Vec<Option<TetrominoType>>>,
    pub active: ActiveView,
    pub next: NextView,
    pub score: u64,
    pub state: GameState,
}

/// The falling piece in grid coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveView {
    pub piece_type: TetrominoType,
    pub cells: Vec<(i32, i32)>,
}

/// The preview piece in its spawn rotation, in box coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextView {
    pub piece_type: TetrominoType,
    pub cells: Vec<(i32, i32)>,
}

impl From<&Piece> for ActiveView {
    fn from(piece: &Piece) -> Self {
        Self {
            piece_type: piece.piece_type,
            cells: piece.occupied_cells().to_vec(),
        }
    }
}

impl From<&Piece> for NextView {
    fn from(piece: &Piece) -> Self {
        Self {
            piece_type: piece.piece_type,
            cells: piece.piece_type.shape(0).map(offset_to_xy).to_vec(),
        }
    }
}

impl<R: Randomizer> Game<R> {
    /// Capture the current state for rendering
    pub fn snapshot(&self) -> Snapshot {
        let grid = self
            .board()
            .row_iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => None,
                        Cell::Filled(piece_type) => Some(*piece_type),
                    })
                    .collect()
            })
            .collect();

        Snapshot {
            rows: self.rows(),
            cols: self.cols(),
            grid,
            active: self.active().into(),
            next: self.next().into(),
            score: self.score(),
            state: self.state(),
        }
    }
}
