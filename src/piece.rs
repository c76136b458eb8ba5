//! The falling piece

use crate::randomizer::Randomizer;
use crate::tetromino::{TYPE_COUNT, TetrominoType, offset_to_xy};
use serde::Serialize;

/// A tetromino placed on the grid. Its shape never changes; its anchor and
/// rotation are moved by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Piece {
    /// The type of tetromino
    pub piece_type: TetrominoType,
    /// Index into the type's rotation states
    rotation: usize,
    /// Top-left corner of the 4x4 box; y may be negative above the grid
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece in rotation 0 at the given anchor
    pub fn new(piece_type: TetrominoType, (x, y): (i32, i32)) -> Self {
        Self {
            piece_type,
            rotation: 0,
            x,
            y,
        }
    }

    /// Create a piece of a random type, consuming one draw
    pub fn random<R: Randomizer + ?Sized>(randomizer: &mut R, anchor: (i32, i32)) -> Self {
        let piece_type = TetrominoType::all()[randomizer.draw() % TYPE_COUNT];
        Self::new(piece_type, anchor)
    }

    /// Current rotation index
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Box offsets for the current rotation
    pub fn rotation_state(&self) -> [u8; 4] {
        self.piece_type.shape(self.rotation)
    }

    /// Absolute `(x, y)` grid cells covered by this piece. Coordinates
    /// saturate at `i32::MAX`, which is outside any board.
    pub fn occupied_cells(&self) -> [(i32, i32); 4] {
        self.rotation_state().map(|offset| {
            let (dx, dy) = offset_to_xy(offset);
            (self.x.saturating_add(dx), self.y.saturating_add(dy))
        })
    }

    /// Move to the next rotation state without any validity check
    pub fn advance_rotation(&mut self) {
        self.rotation = (self.rotation + 1) % self.piece_type.state_count();
    }

    /// A copy moved by `dy` rows and `dx` columns; None if the anchor
    /// would overflow
    pub(crate) fn shifted(&self, dy: i32, dx: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            ..self.clone()
        })
    }

    /// True if any cell sits above the visible grid
    pub fn exceeds_roof(&self) -> bool {
        self.occupied_cells().iter().any(|&(_, y)| y < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randomizer::ScriptedRandomizer;

    #[test]
    fn test_random_uses_draw() {
        let mut rng = ScriptedRandomizer::new(vec![5]);
        let piece = Piece::random(&mut rng, (3, -2));
        assert_eq!(piece.piece_type, TetrominoType::T);
        assert_eq!(piece.rotation(), 0);
        assert_eq!((piece.x, piece.y), (3, -2));
    }

    #[test]
    fn test_occupied_cells() {
        let piece = Piece::new(TetrominoType::T, (3, 0));
        // .T..
        // TTT.
        assert_eq!(piece.occupied_cells(), [(4, 0), (3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_occupied_cells_above_grid() {
        let piece = Piece::new(TetrominoType::I, (3, -2));
        assert_eq!(piece.occupied_cells(), [(3, -1), (4, -1), (5, -1), (6, -1)]);
        assert!(piece.exceeds_roof());
    }

    #[test]
    fn test_advance_rotation_wraps() {
        let mut piece = Piece::new(TetrominoType::J, (0, 0));
        for expected in [1, 2, 3, 0] {
            piece.advance_rotation();
            assert_eq!(piece.rotation(), expected);
        }
    }

    #[test]
    fn test_o_rotation_stays_put() {
        let mut piece = Piece::new(TetrominoType::O, (4, 4));
        let before = piece.occupied_cells();
        piece.advance_rotation();
        assert_eq!(piece.rotation(), 0);
        assert_eq!(piece.occupied_cells(), before);
    }

    #[test]
    fn test_shifted_leaves_original() {
        let piece = Piece::new(TetrominoType::Z, (3, -2));
        let moved = piece.shifted(2, -1).unwrap();
        assert_eq!((moved.x, moved.y), (2, 0));
        assert_eq!((piece.x, piece.y), (3, -2));
        assert_eq!(moved.piece_type, TetrominoType::Z);
    }

    #[test]
    fn test_shifted_overflow_is_none() {
        let piece = Piece::new(TetrominoType::T, (3, -2));
        assert!(piece.shifted(0, i32::MAX).is_none());
        assert!(piece.shifted(i32::MIN, 0).is_none());
    }

    #[test]
    fn test_occupied_cells_saturate() {
        let piece = Piece::new(TetrominoType::I, (i32::MAX - 1, 0));
        let cells = piece.occupied_cells();
        assert_eq!(cells[0], (i32::MAX - 1, 1));
        assert!(cells[1..].iter().all(|&(x, _)| x == i32::MAX));
    }

    #[test]
    fn test_rotation_state_matches_table() {
        let mut piece = Piece::new(TetrominoType::S, (0, 0));
        piece.advance_rotation();
        assert_eq!(piece.rotation_state(), [1, 5, 6, 10]);
    }
}
