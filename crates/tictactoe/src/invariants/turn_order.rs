//! Turn order invariant: the player to act follows from the marks on the board.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `current_player` agrees with the mark counts.
///
/// While in progress it is X when the counts are equal and O otherwise.
/// Once finished it names the player who made the last move, since the
/// deciding move does not advance the turn.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        let next = if x == o { Player::X } else { Player::O };

        if state.is_over() {
            state.current_player() == next.opponent()
        } else {
            state.current_player() == next
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
