//! Tic-Tac-Toe GUI
//!
//! A graphical interface for playing Tic-Tac-Toe against the computer.

use clap::Parser;
use tictactoe::config::AppConfig;
use tictactoe::ui::TicTacToeApp;
use tracing::info;

fn main() -> Result<(), eframe::Error> {
    let config = AppConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .init();

    info!(width = config.width, height = config.height, "starting");

    eframe::run_native(
        "Tic Tac Toe",
        config.native_options(),
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
