//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{Player, Position, Square};

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

const RESET_LABEL: &str = "Reset";
const HELP: &str = "click or 1-9: play | arrows + enter: play cursor | r: reset | q: quit";

/// Screen regions for one frame.
///
/// Drawing and click hit-testing share this layout so a click always
/// lands on the cell the user saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Status line.
    pub status: Rect,
    /// Board cells, indexed by [`Position::to_index`].
    pub cells: [Rect; 9],
    /// Reset button.
    pub reset: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into status, board, reset button and help line.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),               // Status
                Constraint::Min(CELL_HEIGHT * 3),    // Board
                Constraint::Length(3),               // Reset
                Constraint::Length(1),               // Help
            ])
            .split(area);

        let board = center_rect(rows[1], CELL_WIDTH * 3, CELL_HEIGHT * 3);
        let mut cells = [Rect::default(); 9];
        for pos in Position::ALL {
            let (x, y) = pos.coords();
            cells[pos.to_index()] = Rect::new(
                board.x + x as u16 * CELL_WIDTH,
                board.y + y as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board);
        }

        Self {
            status: rows[0],
            cells,
            reset: center_rect(rows[2], RESET_LABEL.len() as u16 + 4, 3),
            help: rows[3],
        }
    }

    /// Returns the board position drawn at terminal cell (`column`, `row`).
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.to_index()].contains(point))
    }

    /// Returns true if (`column`, `row`) is on the reset button.
    pub fn is_reset(&self, column: u16, row: u16) -> bool {
        self.reset.contains(ScreenPosition::new(column, row))
    }
}

/// Renders the app and returns the layout used.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let layout = ScreenLayout::new(frame.area());

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().title("Tic-Tac-Toe").borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let board = app.state().board();
    for pos in Position::ALL {
        draw_cell(
            frame,
            layout.cells[pos.to_index()],
            board.get(pos),
            pos,
            pos == app.cursor(),
        );
    }

    let reset = Paragraph::new(RESET_LABEL)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(reset, layout.reset);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, pos: Position, selected: bool) {
    let (symbol, base_style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
