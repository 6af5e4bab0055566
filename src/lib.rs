//! Tic-Tac-Toe against a perfect computer opponent
//!
//! A human (X) plays a computer (O) on a 3x3 grid. The computer solves the
//! game tree exhaustively on every turn, so it never loses.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Cells, marks, positions and the 3x3 board
//! - [`rules`]: Win and draw detection
//! - [`search`]: Exhaustive minimax search
//! - [`engine`]: Move engine combining rules and search
//! - [`game`]: Turn state machine driving board and engine
//! - [`ui`]: egui front end
//! - [`config`]: Command-line options for the window and logging
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Game, Phase, Pos};
//!
//! let mut game = Game::new();
//!
//! // Human plays the center, the engine answers in the same call
//! let phase = game.human_move(Pos::new(1, 1)).unwrap();
//! assert_eq!(phase, Phase::AwaitingHuman);
//! assert_eq!(game.move_count(), 2);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, Pos, BOARD_SIZE};
pub use engine::{Engine, MoveResult};
pub use error::MoveError;
pub use game::{Game, Phase};
pub use rules::{GameStatus, WinningLine};
