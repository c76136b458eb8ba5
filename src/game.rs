//! Core game state and logic
//!
//! [`Game`] owns the board, the active and next pieces, the score and the
//! game state. [`Game::shift`], [`Game::rotate`] and [`Game::step`] are the
//! only ways that state changes, and each either applies fully or not at all.
//! The game never sleeps or reads a clock; the driver decides when to step.

use crate::board::Board;
use crate::error::GameError;
use crate::piece::Piece;
use crate::randomizer::{Randomizer, SeededRandomizer};
use crate::score::line_clear_points;
use crate::tetromino::BOX_SIZE;
use serde::Serialize;
use tracing::{debug, trace};

/// Row of the spawn anchor. Spawn states only use the top two box rows, so a
/// new piece starts fully above the grid and falls into view.
pub const SPAWN_Y: i32 = -2;

/// Horizontal nudges tried, in order, after a rotation
const KICK_OFFSETS: [i32; 3] = [0, 1, -1];

/// Game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameState {
    Playing,
    /// A piece could not fully enter the grid. Permanent.
    ToppedOut,
}

/// Input actions the game can process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

/// Outcome of one [`Game::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The active piece fell one row
    Fell,
    /// The active piece locked and the next piece took its place
    Locked { lines_cleared: usize, points: u64 },
    /// The active piece came to rest above the grid; the game is now over
    ToppedOut,
    /// The game was already over; nothing changed
    Halted,
}

impl Step {
    /// Whether the tick counts as a success
    pub fn succeeded(self) -> bool {
        matches!(self, Step::Fell | Step::Locked { .. })
    }
}

/// The main game struct
#[derive(Debug, Clone)]
pub struct Game<R = SeededRandomizer> {
    /// The game board
    board: Board,
    /// Current falling piece
    active: Piece,
    /// Piece shown in the preview, promoted on lock
    next: Piece,
    /// Total points
    score: u64,
    /// Current game state
    state: GameState,
    /// Source of piece types
    randomizer: R,
}

impl Game<SeededRandomizer> {
    /// Create a new game with a fresh random seed
    pub fn new(rows: i32, cols: i32) -> Result<Self, GameError> {
        Self::with_randomizer(rows, cols, SeededRandomizer::new())
    }

    /// Create a new game whose piece sequence is fixed by `seed`
    pub fn with_seed(rows: i32, cols: i32, seed: u64) -> Result<Self, GameError> {
        Self::with_randomizer(rows, cols, SeededRandomizer::with_seed(seed))
    }

    /// Seed of the piece sequence, for replays
    pub fn seed(&self) -> u64 {
        self.randomizer.seed()
    }
}

impl<R: Randomizer> Game<R> {
    /// Create a new game drawing pieces from `randomizer`. The active piece
    /// takes the first draw and the next piece the second.
    pub fn with_randomizer(rows: i32, cols: i32, mut randomizer: R) -> Result<Self, GameError> {
        if rows <= 0 || cols <= 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }

        let spawn = spawn_anchor(cols);
        let active = Piece::random(&mut randomizer, spawn);
        let next = Piece::random(&mut randomizer, spawn);
        debug!(rows, cols, active = ?active.piece_type, next = ?next.piece_type, "new game");

        Ok(Self {
            board: Board::new(rows as usize, cols as usize),
            active,
            next,
            score: 0,
            state: GameState::Playing,
            randomizer,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::ToppedOut
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Process an input action, returning whether it took effect
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.shift(0, -1),
            Action::MoveRight => self.shift(0, 1),
            Action::SoftDrop => self.shift(1, 0),
            Action::Rotate => self.rotate(),
        }
    }

    /// Try to translate the active piece by `dy` rows and `dx` columns.
    /// Leaves the piece untouched and returns false if the result hits a
    /// wall, the floor or a locked cell, or the anchor would overflow.
    pub fn shift(&mut self, dy: i32, dx: i32) -> bool {
        if self.is_over() {
            return false;
        }
        match self.active.shifted(dy, dx) {
            Some(moved) if self.board.is_valid(&moved) => {
                self.active = moved;
                true
            }
            _ => {
                trace!(dy, dx, "shift rejected");
                false
            }
        }
    }

    /// Try to rotate the active piece, nudging it one column right and then
    /// one column left if the plain rotation does not fit. Leaves the piece
    /// untouched and returns false if none of the three positions fits.
    pub fn rotate(&mut self) -> bool {
        if self.is_over() {
            return false;
        }

        let mut rotated = self.active.clone();
        rotated.advance_rotation();

        let kicked = KICK_OFFSETS.iter().find_map(|&dx| {
            rotated
                .shifted(0, dx)
                .filter(|candidate| self.board.is_valid(candidate))
        });
        match kicked {
            Some(candidate) => {
                self.active = candidate;
                true
            }
            None => {
                trace!(piece = ?self.active.piece_type, "rotation rejected");
                false
            }
        }
    }

    /// Advance the game by one tick: apply gravity, or lock the active piece
    /// and clear full rows if it cannot fall.
    pub fn step(&mut self) -> Step {
        if self.is_over() {
            return Step::Halted;
        }

        if self.shift(1, 0) {
            return Step::Fell;
        }

        if self.active.exceeds_roof() {
            self.state = GameState::ToppedOut;
            debug!(score = self.score, piece = ?self.active.piece_type, "topped out");
            return Step::ToppedOut;
        }

        self.lock_active();

        let lines_cleared = self.board.clear_lines();
        let points = line_clear_points(lines_cleared);
        self.score += points;
        if lines_cleared > 0 {
            debug!(lines_cleared, points, score = self.score, "lines cleared");
        }

        Step::Locked {
            lines_cleared,
            points,
        }
    }

    /// Write the active piece into the board, promote the next piece and
    /// draw a new one
    fn lock_active(&mut self) {
        self.board.lock_piece(&self.active);
        debug!(
            piece = ?self.active.piece_type,
            cells = ?self.active.occupied_cells(),
            "piece locked"
        );

        let spawn = spawn_anchor(self.board.cols() as i32);
        let incoming = Piece::random(&mut self.randomizer, spawn);
        self.active = std::mem::replace(&mut self.next, incoming);
    }
}

/// Anchor that centres the 4-wide box horizontally
fn spawn_anchor(cols: i32) -> (i32, i32) {
    ((cols - BOX_SIZE) / 2, SPAWN_Y)
}
