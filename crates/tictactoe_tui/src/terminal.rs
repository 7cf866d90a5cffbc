//! Interactive terminal session.

use crate::app::App;
use crate::input::{map_click, map_key};
use crate::ui::{self, ScreenLayout};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe::GameEngine;
use tracing::{error, info, instrument};

/// Runs the game until the user quits, restoring the terminal afterwards.
#[instrument]
pub fn run(engine: GameEngine) -> Result<()> {
    info!(tie_rule = %engine.tie_rule(), "Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(engine));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Session ended");
    res
}

/// One synchronous transition per input event, then redraw.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    let mut layout = ScreenLayout::default();

    while app.is_running() {
        terminal.draw(|f| layout = ui::draw(f, &app))?;

        let command = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key.code, app.cursor()),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                map_click(&layout, mouse.column, mouse.row)
            }
            _ => None,
        };

        if let Some(command) = command {
            app.apply(command);
        }
    }

    Ok(())
}
