//! Headless replay of a move list.

use crate::app::status_line;
use derive_more::{Display, Error};
use tictactoe::{Action, GameEngine, GameState};
use tracing::{debug, instrument};

/// A move token that is not an `x,y` pair.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Malformed move {:?}: expected x,y with non-negative integers", token)]
pub struct ReplayError {
    /// The offending token.
    pub token: String,
}

/// Parses one `x,y` token.
///
/// Only the syntax is checked; off-board coordinates are left to the
/// engine, which ignores them.
#[instrument]
pub fn parse_move(token: &str) -> Result<(usize, usize), ReplayError> {
    let malformed = || ReplayError {
        token: token.to_string(),
    };
    let (x, y) = token.split_once(',').ok_or_else(malformed)?;
    let x = x.trim().parse().map_err(|_| malformed())?;
    let y = y.trim().parse().map_err(|_| malformed())?;
    Ok((x, y))
}

/// Applies `tokens` in order to a fresh game.
///
/// Every token is parsed before any move is played.
#[instrument(skip(engine))]
pub fn replay<S: AsRef<str> + std::fmt::Debug>(
    engine: &GameEngine,
    tokens: &[S],
) -> Result<GameState, ReplayError> {
    let moves = tokens
        .iter()
        .map(|t| parse_move(t.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(moves.into_iter().fold(engine.reset(), |state, (x, y)| {
        let next = engine.dispatch(&state, Action::Play { x, y });
        if next == state {
            debug!(x, y, "Move had no effect");
        }
        next
    }))
}

/// Board followed by the status line.
pub fn report(state: &GameState) -> String {
    format!("{}\n\n{}", state.board(), status_line(state))
}
