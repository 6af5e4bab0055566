//! Error types for move validation

use thiserror::Error;

use crate::board::Pos;

/// Reasons a move is rejected. Rejection never changes the board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("position ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("game is already over")]
    GameOver,

    #[error("not the human player's turn")]
    NotHumanTurn,
}
