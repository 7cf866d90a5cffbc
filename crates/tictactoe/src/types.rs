//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board owns its squares by value, so a cloned board never shares
/// storage with the original.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board as three rows, with empty squares shown as their 1-9 key.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for (col, square) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match square {
                    Square::Empty => write!(f, "{}", row * 3 + col + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
            }
        }
        Ok(())
    }
}

/// How a finished game ended.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// Player completed a line.
    #[display("{} wins", _0)]
    Winner(Player),
    /// Board filled with no line completed.
    #[display("Tie")]
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

/// Immutable snapshot of a game.
///
/// Snapshots are produced by [`crate::GameEngine`]; every transition
/// returns a fresh value and leaves its input untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move, no outcome.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: None,
        }
    }

    /// Assembles a snapshot from raw parts.
    ///
    /// No invariant is checked here; use [`crate::invariants`] to
    /// validate hand-built states.
    pub fn from_parts(board: Board, current_player: Player, outcome: Option<Outcome>) -> Self {
        Self {
            board,
            current_player,
            outcome,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to act, or the winner once the game is won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the outcome, `None` while the game is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns true once an outcome is set.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.and_then(|o| o.winner())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_fresh() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.outcome(), None);
        assert!(state.board().squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_cloned_board_is_independent() {
        let original = Board::new();
        let mut copy = original.clone();
        copy.set(Position::Center, Square::Occupied(Player::X));
        assert!(original.is_empty(Position::Center));
        assert!(!copy.is_empty(Position::Center));
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Player::O).to_string(), "O wins");
        assert_eq!(Outcome::Tie.to_string(), "Tie");
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new();
        let json = serde_json::to_string(&state).expect("serialize");
        assert!(json.contains("\"current_player\":\"X\""));
        assert!(json.contains("\"outcome\":null"));
    }
}
