//! Keyboard and mouse mapping.

use crate::ui::ScreenLayout;
use crossterm::event::KeyCode;
use tictactoe::{Action, Position};
use tracing::instrument;

/// What a single input event asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an action to the engine.
    Act(Action),
    /// Move the keyboard cursor.
    Cursor(Position),
    /// Leave the game.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the board edge.
#[instrument]
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (x, y) = cursor.coords();
    let (x, y) = match key {
        KeyCode::Left => (x.saturating_sub(1), y),
        KeyCode::Right => ((x + 1).min(2), y),
        KeyCode::Up => (x, y.saturating_sub(1)),
        KeyCode::Down => (x, (y + 1).min(2)),
        _ => (x, y),
    };
    Position::from_coords(x, y).unwrap_or(cursor)
}

/// Maps a key press to a command.
///
/// Digits 1-9 play the matching square in reading order; Enter or Space
/// plays the cursor square.
#[instrument]
pub fn map_key(key: KeyCode, cursor: Position) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Act(Action::Reset)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Act(Action::play_at(cursor))),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(|pos| Command::Act(Action::play_at(pos))),
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Some(Command::Cursor(move_cursor(cursor, key)))
        }
        _ => None,
    }
}

/// Maps a left click at terminal cell (`column`, `row`) to a command.
#[instrument(skip(layout))]
pub fn map_click(layout: &ScreenLayout, column: u16, row: u16) -> Option<Command> {
    if let Some(pos) = layout.cell_at(column, row) {
        Some(Command::Act(Action::play_at(pos)))
    } else if layout.is_reset(column, row) {
        Some(Command::Act(Action::Reset))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Char('x')), Position::TopRight);
    }

    #[test]
    fn test_digits_play_in_reading_order() {
        assert_eq!(
            map_key(KeyCode::Char('1'), Position::Center),
            Some(Command::Act(Action::Play { x: 0, y: 0 }))
        );
        assert_eq!(
            map_key(KeyCode::Char('6'), Position::Center),
            Some(Command::Act(Action::Play { x: 2, y: 1 }))
        );
        assert_eq!(map_key(KeyCode::Char('0'), Position::Center), None);
    }

    #[test]
    fn test_enter_plays_cursor() {
        assert_eq!(
            map_key(KeyCode::Enter, Position::BottomCenter),
            Some(Command::Act(Action::Play { x: 1, y: 2 }))
        );
        assert_eq!(
            map_key(KeyCode::Char(' '), Position::TopLeft),
            Some(Command::Act(Action::Play { x: 0, y: 0 }))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(KeyCode::Char('q'), Position::Center), Some(Command::Quit));
        assert_eq!(map_key(KeyCode::Esc, Position::Center), Some(Command::Quit));
        assert_eq!(
            map_key(KeyCode::Char('r'), Position::Center),
            Some(Command::Act(Action::Reset))
        );
        assert_eq!(
            map_key(KeyCode::Down, Position::Center),
            Some(Command::Cursor(Position::BottomCenter))
        );
        assert_eq!(map_key(KeyCode::Tab, Position::Center), None);
    }

    #[test]
    fn test_clicks_hit_cells_and_reset() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));

        for pos in Position::ALL {
            let cell = layout.cells[pos.to_index()];
            assert_eq!(
                map_click(&layout, cell.x + cell.width / 2, cell.y + cell.height / 2),
                Some(Command::Act(Action::play_at(pos)))
            );
        }

        let reset = layout.reset;
        assert_eq!(
            map_click(&layout, reset.x + 1, reset.y + 1),
            Some(Command::Act(Action::Reset))
        );
        assert_eq!(map_click(&layout, 0, 0), None);
    }
}
