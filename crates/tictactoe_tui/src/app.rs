//! Application state and logic.

use crate::input::Command;
use tictactoe::{GameEngine, GameState, Outcome, Position};
use tracing::{debug, instrument};

/// Status text shown above the board.
pub fn status_line(state: &GameState) -> String {
    match state.outcome() {
        None => format!("Current player is: {}", state.current_player()),
        Some(Outcome::Winner(player)) => format!("Winner is: {}", player),
        Some(Outcome::Tie) => "Tied".to_string(),
    }
}

/// Main application state.
///
/// Holds exactly one game snapshot, replaced wholesale on every action.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    state: GameState,
    cursor: Position,
    running: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            state: engine.reset(),
            engine,
            cursor: Position::Center,
            running: true,
        }
    }

    /// Gets the current game snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// False once the user has asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Gets the current status message.
    pub fn status_line(&self) -> String {
        status_line(&self.state)
    }

    /// Handles one input command.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Act(action) => {
                self.state = self.engine.dispatch(&self.state, action);
                debug!(status = %self.status_line(), "Action handled");
            }
            Command::Cursor(pos) => self.cursor = pos,
            Command::Quit => {
                debug!("Quit requested");
                self.running = false;
            }
        }
    }
}
