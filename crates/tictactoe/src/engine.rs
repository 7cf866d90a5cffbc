//! Tic-tac-toe game engine.
//!
//! The engine is a pure transition function: every operation takes a
//! snapshot by reference and returns a new one. Rejected moves return an
//! equal copy of the input.

use super::action::{Action, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::{has_won, is_full};
use super::{GameState, Outcome, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What happens when the board fills up with no line completed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TieRule {
    /// A full board with no winner ends the game as a tie.
    #[default]
    Detect,
    /// Ties are never recorded; a full board stays in progress with no legal moves.
    Never,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameEngine {
    tie_rule: TieRule,
}

impl GameEngine {
    /// Creates an engine with the given tie policy.
    #[instrument]
    pub fn new(tie_rule: TieRule) -> Self {
        Self { tie_rule }
    }

    /// Returns the tie policy.
    pub fn tie_rule(&self) -> TieRule {
        self.tie_rule
    }

    /// Returns a fresh game: empty board, X to move, no outcome.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameState {
        debug!("Resetting game");
        GameState::new()
    }

    /// Applies an action from the presentation layer.
    #[instrument(skip(self, state, action), fields(action = %action))]
    pub fn dispatch(&self, state: &GameState, action: Action) -> GameState {
        match action {
            Action::Play { x, y } => self.apply_move(state, x, y),
            Action::Reset => self.reset(),
        }
    }

    /// Places the current player's mark at column `x`, row `y`.
    ///
    /// Illegal moves (game over, occupied square, off-board coordinates)
    /// are silent no-ops: the returned state equals `state`.
    #[instrument(skip(self, state))]
    pub fn apply_move(&self, state: &GameState, x: usize, y: usize) -> GameState {
        match self.try_apply_at(state, x, y) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Move rejected");
                state.clone()
            }
        }
    }

    /// Like [`apply_move`](Self::apply_move), but reports why a move was rejected.
    #[instrument(skip(self, state))]
    pub fn try_apply_at(&self, state: &GameState, x: usize, y: usize) -> Result<GameState, MoveError> {
        let pos = Position::from_coords(x, y).ok_or(MoveError::OutOfBounds { x, y })?;
        self.try_apply_move(state, pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// On a win the outcome is set and the turn does not advance. Under
    /// [`TieRule::Detect`] a full board with no win records a tie, again
    /// without advancing the turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if an outcome is already set.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self, state), fields(position = %pos, player = %state.current_player()))]
    pub fn try_apply_move(&self, state: &GameState, pos: Position) -> Result<GameState, MoveError> {
        MoveContract::pre(state, &pos)?;

        let player = state.current_player();
        let mut board = state.board().clone();
        board.set(pos, Square::Occupied(player));

        let next = if has_won(&board, player) {
            info!(%player, "Game won");
            GameState::from_parts(board, player, Some(Outcome::Winner(player)))
        } else if self.tie_rule == TieRule::Detect && is_full(&board) {
            info!("Game tied");
            GameState::from_parts(board, player, Some(Outcome::Tie))
        } else {
            GameState::from_parts(board, player.opponent(), None)
        };

        debug_assert_eq!(MoveContract::post(state, &next), Ok(()));
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn play(engine: &GameEngine, moves: &[(usize, usize)]) -> GameState {
        moves
            .iter()
            .fold(engine.reset(), |state, &(x, y)| engine.apply_move(&state, x, y))
    }

    // X O X / X O O / O X X, filled without any line.
    const DRAW_SEQUENCE: [(usize, usize); 9] = [
        (0, 0),
        (1, 0),
        (2, 0),
        (1, 1),
        (0, 1),
        (2, 1),
        (1, 2),
        (0, 2),
        (2, 2),
    ];

    #[test]
    fn test_move_places_mark_and_advances() {
        let engine = GameEngine::default();
        let before = engine.reset();
        let after = engine.apply_move(&before, 2, 1);
        assert_eq!(
            after.board().get(Position::MiddleRight),
            Square::Occupied(Player::X)
        );
        assert_eq!(after.current_player(), Player::O);
        assert_eq!(after.outcome(), None);
        assert_eq!(before, GameState::new());
    }

    #[test]
    fn test_occupied_square_rejected() {
        let engine = GameEngine::default();
        let state = engine.apply_move(&engine.reset(), 1, 1);
        assert_eq!(
            engine.try_apply_at(&state, 1, 1),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(engine.apply_move(&state, 1, 1), state);
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let engine = GameEngine::default();
        let state = engine.reset();
        assert_eq!(
            engine.try_apply_at(&state, 0, 3),
            Err(MoveError::OutOfBounds { x: 0, y: 3 })
        );
        assert_eq!(engine.apply_move(&state, 5, 5), state);
    }

    #[test]
    fn test_draw_detected() {
        let state = play(&GameEngine::new(TieRule::Detect), &DRAW_SEQUENCE);
        assert_eq!(state.outcome(), Some(Outcome::Tie));
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_draw_never_recorded() {
        let engine = GameEngine::new(TieRule::Never);
        let state = play(&engine, &DRAW_SEQUENCE);
        assert_eq!(state.outcome(), None);
        assert_eq!(state.current_player(), Player::O);
        for pos in Position::ALL {
            let (x, y) = pos.coords();
            assert_eq!(engine.apply_move(&state, x, y), state);
        }
    }

    #[test]
    fn test_dispatch_reset() {
        let engine = GameEngine::default();
        let state = play(&engine, &[(0, 0), (1, 1)]);
        assert_eq!(engine.dispatch(&state, Action::Reset), GameState::new());
    }

    #[test]
    fn test_tie_rule_parses() {
        assert_eq!("never".parse::<TieRule>(), Ok(TieRule::Never));
        assert_eq!(TieRule::Detect.to_string(), "detect");
        assert!("sometimes".parse::<TieRule>().is_err());
    }
}
