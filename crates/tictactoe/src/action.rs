//! First-class action types for tic-tac-toe.
//!
//! Actions are what the presentation layer forwards to the engine: a
//! click on a cell or a click on reset. Rejections are reported as
//! [`MoveError`] by the fallible entry points.

use super::Position;
use serde::{Deserialize, Serialize};

/// A request forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Place the current player's mark at column `x`, row `y`.
    #[display("play ({}, {})", x, y)]
    Play {
        /// Column, 0-2.
        x: usize,
        /// Row, 0-2.
        y: usize,
    },
    /// Start a fresh game.
    #[display("reset")]
    Reset,
}

impl Action {
    /// Play action targeting a board position.
    pub fn play_at(pos: Position) -> Self {
        let (x, y) = pos.coords();
        Action::Play { x, y }
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The coordinates do not name a square.
    #[display("Coordinates ({}, {}) are off the board", x, y)]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_at_uses_column_row() {
        assert_eq!(
            Action::play_at(Position::MiddleRight),
            Action::Play { x: 2, y: 1 }
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            MoveError::OutOfBounds { x: 3, y: 0 }.to_string(),
            "Coordinates (3, 0) are off the board"
        );
    }
}
