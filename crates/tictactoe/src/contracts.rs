//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::{GameState, Position, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once an outcome is set.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a move onto an occupied square.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: the game is in progress and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        SquareIsEmpty::check(pos, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is in progress
/// - Square must be empty
///
/// Postconditions:
/// - Exactly one square went from empty to the mover's mark, no other square changed
/// - Turn advances unless the move decided the game
/// - All state invariants hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let mover = before.current_player();
        let mut placed = 0;

        for pos in Position::ALL {
            let old = before.board().get(pos);
            let new = after.board().get(pos);
            if old == new {
                continue;
            }
            if old != Square::Empty || new != Square::Occupied(mover) {
                warn!(%pos, ?old, ?new, "Square changed illegally");
                return Err(MoveError::InvariantViolation(format!(
                    "Postcondition failed: square {} changed from {:?} to {:?}",
                    pos, old, new
                )));
            }
            placed += 1;
        }

        if placed != 1 {
            warn!(placed, "Move placed wrong number of marks");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {} squares filled, expected 1",
                placed
            )));
        }

        let expected_turn = if after.is_over() {
            mover
        } else {
            mover.opponent()
        };
        if after.current_player() != expected_turn {
            warn!(
                expected = %expected_turn,
                actual = %after.current_player(),
                "Turn did not advance correctly"
            );
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {} to move, expected {}",
                after.current_player(),
                expected_turn
            )));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameEngine, Player};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        assert!(MoveContract::pre(&state, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let state = GameEngine::default().apply_move(&GameState::new(), 1, 1);
        assert_eq!(
            MoveContract::pre(&state, &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let engine = GameEngine::default();
        let mut state = GameState::new();
        for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            state = engine.apply_move(&state, x, y);
        }
        assert_eq!(
            MoveContract::pre(&state, &Position::BottomRight),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let after = GameEngine::default().apply_move(&before, 1, 1);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let before = GameEngine::default().apply_move(&GameState::new(), 1, 1);
        let mut board = before.board().clone();
        board.set(Position::Center, Square::Occupied(Player::O));
        let after = GameState::from_parts(board, Player::X, None);
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_extra_mark() {
        let before = GameState::new();
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        let after = GameState::from_parts(board, Player::O, None);
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_stalled_turn() {
        let before = GameState::new();
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        let after = GameState::from_parts(board, Player::X, None);
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
