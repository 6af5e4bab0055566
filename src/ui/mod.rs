//! GUI module for the Tic-Tac-Toe game
//!
//! Native window built on egui/eframe. The UI holds only layout state and
//! forwards clicks to [`crate::game::Game`].

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
