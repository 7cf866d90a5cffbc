//! Mark balance invariant: X never trails O and never leads by more than one.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `#X - #O` is 0 or 1.
///
/// X moves first and players alternate, so X can be at most one mark
/// ahead and never behind.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O or one more"
    }
}
