use thiserror::Error;

use crate::CELL_COUNT;

/// Errors raised by the game engine.
///
/// A move on an occupied cell or after the game is over is not an error;
/// see [`crate::game::MoveResult`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cell index {0} is outside the board (expected < {})", CELL_COUNT)]
    InvalidIndex(usize),

    #[error("invalid board text: {0}")]
    InvalidBoard(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
