//! Move engine: terminal detection and the computer's move choice
//!
//! The engine wraps the exhaustive [`Searcher`] and the rule checks behind
//! the two calls the game driver needs:
//!
//! 1. [`Engine::terminal_status`] after every move
//! 2. [`Engine::best_move`] when it is the computer's turn
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Engine, GameStatus, Mark, Pos};
//!
//! let mut engine = Engine::new();
//! let mut board = Board::new();
//! board.place(Pos::new(1, 1), Mark::X);
//!
//! assert_eq!(Engine::terminal_status(&board), GameStatus::InProgress);
//! if let Some(pos) = engine.best_move(&board) {
//!     board.place(pos, Mark::O);
//! }
//! assert_eq!(board.mark_count(Mark::O), 1);
//! ```

use std::time::Instant;

use tracing::{debug, instrument, warn};

use crate::board::{Board, Mark, Pos};
use crate::rules::{terminal_status, GameStatus};
use crate::search::Searcher;

/// Result of a move search with statistics for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value of the move: +1 win, 0 draw, -1 loss
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    /// Result for a call made outside its precondition
    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            time_ms,
            nodes: 0,
        }
    }
}

/// Computer opponent.
///
/// Plays `O` unless built with [`Engine::with_side`]. The search is solved
/// exactly on every call, so the engine never loses from a position it
/// has not already lost.
#[derive(Debug, Clone)]
pub struct Engine {
    searcher: Searcher,
}

impl Engine {
    /// Engine playing `O` against a human `X`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_side(Mark::O)
    }

    #[must_use]
    pub fn with_side(side: Mark) -> Self {
        Self {
            searcher: Searcher::new(side),
        }
    }

    /// Mark the engine plays
    #[inline]
    pub fn side(&self) -> Mark {
        self.searcher.side()
    }

    /// Win, draw, or in progress, with the winning line when there is one.
    #[inline]
    pub fn terminal_status(board: &Board) -> GameStatus {
        terminal_status(board)
    }

    /// Best move for the engine's side, or `None` if the game is over
    /// or there is no empty cell.
    #[must_use]
    pub fn best_move(&mut self, board: &Board) -> Option<Pos> {
        self.best_move_with_stats(board).best_move
    }

    /// Best move with search statistics.
    #[must_use]
    #[instrument(skip_all, fields(side = %self.side()))]
    pub fn best_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();

        let status = terminal_status(board);
        if status.is_terminal() {
            warn!(?status, "best move requested on a finished board");
            return MoveResult::no_move(start.elapsed().as_millis() as u64);
        }

        let result = self.searcher.search(board);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "search complete"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
