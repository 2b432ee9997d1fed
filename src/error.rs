use thiserror::Error;

use crate::types::{Move, Position};

/// Reasons a game operation is rejected. The game state is never modified
/// when one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not in the legal-move set of the side to move
    #[error("invalid move {mv}")]
    InvalidMove { mv: Move },

    /// A move was attempted after the game ended
    #[error("game is already over")]
    GameOver,

    /// A board was built with a square outside the 8x8 grid
    #[error("square {pos} is off the board")]
    SquareOffBoard { pos: Position },

    /// A board was built with two pawns on the same square
    #[error("square {pos} is listed twice")]
    SquareTaken { pos: Position },

    /// A human tried to move while the computer-controlled side is to move
    #[error("it is not the player's turn")]
    NotPlayersTurn,

    /// The computer was asked to move for a side it does not control
    #[error("it is not the AI's turn")]
    NotAiTurn,
}
