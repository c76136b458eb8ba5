//! TETRS engine - the rules of a falling-block puzzle game
//!
//! Pieces fall onto a fixed-size grid, can be shifted and rotated, lock when
//! they can no longer fall, and clear full rows for points. Rendering, input
//! devices and frame pacing are left to the caller: drive a [`Game`] with
//! [`Game::shift`], [`Game::rotate`] and [`Game::step`] and read it back
//! through its accessors or a [`Snapshot`].

pub mod board;
pub mod error;
pub mod game;
pub mod piece;
pub mod randomizer;
pub mod score;
pub mod settings;
pub mod snapshot;
pub mod tetromino;

pub use board::{Board, Cell};
pub use error::{GameError, SettingsError};
pub use game::{Action, Game, GameState, Step};
pub use piece::Piece;
pub use randomizer::{Randomizer, ScriptedRandomizer, SeededRandomizer};
pub use settings::Settings;
pub use snapshot::Snapshot;
pub use tetromino::TetrominoType;
