//! Game rules for Tic-Tac-Toe
//!
//! This module implements the terminal checks:
//! - Win detection over the 8 lines (3 rows, 3 columns, 2 diagonals)
//! - Draw detection (full board, no line)

pub mod status;
pub mod win;

// Re-exports for convenient access
pub use status::{terminal_status, GameStatus};
pub use win::{find_winning_line, has_three_in_row, WinningLine, LINES};
