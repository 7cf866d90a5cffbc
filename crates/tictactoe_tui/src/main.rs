//! tictactoe - play in the terminal or replay a move list.

use anyhow::Result;
use clap::Parser;
use tictactoe::GameEngine;
use tictactoe_tui::{Cli, Command, Settings};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?.with_tie_rule(cli.tie_rule);
    let engine = GameEngine::new(*settings.tie_rule());

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            tictactoe_tui::init_file_logging(&settings)?;
            tictactoe_tui::run(engine)
        }
        Command::Replay { moves } => {
            tictactoe_tui::init_stderr_logging(&settings);
            let state = tictactoe_tui::replay(&engine, &moves)?;
            println!("{}", tictactoe_tui::report(&state));
            Ok(())
        }
    }
}
