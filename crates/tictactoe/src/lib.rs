//! Pure tic-tac-toe game logic.
//!
//! The crate models a 3x3 game as immutable [`GameState`] snapshots and a
//! [`GameEngine`] that maps `(state, action)` to a new snapshot.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Action, GameEngine, Outcome, Player};
//!
//! let engine = GameEngine::default();
//! let mut state = engine.reset();
//! for (x, y) in [(0, 0), (1, 1), (1, 0), (2, 2), (2, 0)] {
//!     state = engine.dispatch(&state, Action::Play { x, y });
//! }
//! assert_eq!(state.outcome(), Some(Outcome::Winner(Player::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Action, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, SquareIsEmpty};
pub use engine::{GameEngine, TieRule};
pub use position::Position;
pub use types::{Board, GameState, Outcome, Player, Square};
