//! Terminal front end for the tictactoe engine.
//!
//! The front end renders [`tictactoe::GameState`] snapshots and forwards
//! clicks and key presses to the engine as [`tictactoe::Action`]s.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod terminal;
mod ui;

pub use app::{App, status_line};
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Settings};
pub use input::{Command as InputCommand, map_click, map_key, move_cursor};
pub use logging::{init_file as init_file_logging, init_stderr as init_stderr_logging};
pub use replay::{ReplayError, parse_move, replay, report};
pub use terminal::run;
pub use ui::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout, draw};
