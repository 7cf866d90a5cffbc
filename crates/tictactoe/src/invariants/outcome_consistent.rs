//! Outcome invariant: the recorded outcome matches the board.

use super::super::rules::{check_winner, has_won, is_draw};
use super::super::{GameState, Outcome};
use super::Invariant;

/// Invariant: the outcome agrees with the lines on the board.
///
/// - `Winner(p)`: `p` holds a line and is the recorded current player.
/// - `Tie`: the board is full with no line.
/// - in progress: nobody holds a line.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.outcome() {
            Some(Outcome::Winner(player)) => {
                has_won(board, player) && state.current_player() == player
            }
            Some(Outcome::Tie) => is_draw(board),
            None => check_winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Outcome matches the lines on the board"
    }
}
