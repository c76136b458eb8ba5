//! Tetromino definitions and shapes
//!
//! Every shape lives in a 4x4 bounding box. Cells are numbered row-major:
//!
//! ```text
//!  0  1  2  3
//!  4  5  6  7
//!  8  9 10 11
//! 12 13 14 15
//! ```

use serde::{Deserialize, Serialize};

/// Number of tetromino types
pub const TYPE_COUNT: usize = 7;

/// Width and height of the box every rotation state fits in
pub const BOX_SIZE: i32 = 4;

/// Cell offsets for each type and rotation. Unused states of O repeat state 0
/// and are never reached, because its state count is 1.
const SHAPES: [[[u8; 4]; 4]; TYPE_COUNT] = [
    // I
    [[4, 5, 6, 7], [2, 6, 10, 14], [8, 9, 10, 11], [1, 5, 9, 13]],
    // J
    [[0, 4, 5, 6], [1, 2, 5, 9], [4, 5, 6, 10], [1, 5, 8, 9]],
    // L
    [[2, 4, 5, 6], [1, 5, 9, 10], [4, 5, 6, 8], [0, 1, 5, 9]],
    // O
    [[1, 2, 5, 6], [1, 2, 5, 6], [1, 2, 5, 6], [1, 2, 5, 6]],
    // S
    [[1, 2, 4, 5], [1, 5, 6, 10], [5, 6, 8, 9], [0, 4, 5, 9]],
    // T
    [[1, 4, 5, 6], [1, 5, 6, 9], [4, 5, 6, 9], [1, 4, 5, 9]],
    // Z
    [[0, 1, 5, 6], [2, 5, 6, 9], [4, 5, 9, 10], [1, 4, 5, 8]],
];

/// The 7 tetromino types, in identifier order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TetrominoType {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl TetrominoType {
    /// Get all tetromino types, indexed by identifier
    pub fn all() -> [TetrominoType; TYPE_COUNT] {
        [
            TetrominoType::I,
            TetrominoType::J,
            TetrominoType::L,
            TetrominoType::O,
            TetrominoType::S,
            TetrominoType::T,
            TetrominoType::Z,
        ]
    }

    /// Look up a type by its identifier in `[0, TYPE_COUNT)`
    pub fn from_index(index: usize) -> Option<TetrominoType> {
        Self::all().get(index).copied()
    }

    /// The identifier written into the grid when a piece of this type locks
    pub fn index(self) -> usize {
        self as usize
    }

    /// How many distinct rotation states this type has
    pub fn state_count(self) -> usize {
        match self {
            TetrominoType::O => 1,
            _ => 4,
        }
    }

    /// The four box offsets (`row * 4 + col`) for a rotation state.
    /// `rotation` wraps modulo the state count.
    pub fn shape(self, rotation: usize) -> [u8; 4] {
        SHAPES[self.index()][rotation % self.state_count()]
    }
}

/// Split a box offset into `(col, row)`
pub fn offset_to_xy(offset: u8) -> (i32, i32) {
    let offset = offset as i32;
    (offset % BOX_SIZE, offset / BOX_SIZE)
}
