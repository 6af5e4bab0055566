//! Exhaustive minimax search with alpha-beta pruning
//!
//! The searching side maximizes, its opponent minimizes. Positions are scored
//! only at terminal nodes, with no depth discount:
//!
//! - [`score::WIN`] when the searching side has a completed line
//! - [`score::LOSS`] when the opponent has a completed line
//! - [`score::DRAW`] when the board is full
//!
//! Every root move is searched with the full `(LOSS, WIN)` window, so its
//! score is exact and pruning never changes which move is chosen. Among
//! equal scores the first empty cell in row-major order wins.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark, Pos};
//! use tictactoe::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(Pos::new(1, 1), Mark::X);
//!
//! let mut searcher = Searcher::new(Mark::O);
//! let result = searcher.search(&board);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Mark, Pos};
use crate::rules::has_three_in_row;

/// Terminal scores from the searching side's point of view
pub mod score {
    pub const WIN: i32 = 1;
    pub const DRAW: i32 = 0;
    pub const LOSS: i32 = -1;
}

/// Bound strictly outside every reachable score
const INF: i32 = score::WIN + 1;

/// Search result containing the best move found and node count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Exact minimax value of `best_move`
    pub score: i32,
    /// Total nodes visited, root children included
    pub nodes: u64,
}

/// Minimax searcher playing as `side`.
#[derive(Debug, Clone)]
pub struct Searcher {
    side: Mark,
    nodes: u64,
}

impl Searcher {
    pub fn new(side: Mark) -> Self {
        Self { side, nodes: 0 }
    }

    #[inline]
    pub fn side(&self) -> Mark {
        self.side
    }

    /// Find the best move for `side`, assuming it is `side`'s turn.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;

        let mut best_move = None;
        let mut best_score = -INF;

        for pos in board.empty_cells() {
            let child = board.with_mark(pos, self.side);
            let value = self.alpha_beta(&child, false, -INF, INF);

            // Strict comparison keeps the first move among equals.
            if value > best_score {
                best_score = value;
                best_move = Some(pos);
            }
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { score::DRAW },
            nodes: self.nodes,
        }
    }

    /// Score a terminal position, `None` if play continues.
    fn terminal_score(&self, board: &Board) -> Option<i32> {
        if has_three_in_row(board, self.side) {
            Some(score::WIN)
        } else if has_three_in_row(board, self.side.opponent()) {
            Some(score::LOSS)
        } else if board.is_full() {
            Some(score::DRAW)
        } else {
            None
        }
    }

    fn alpha_beta(&mut self, board: &Board, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if let Some(value) = self.terminal_score(board) {
            return value;
        }

        if maximizing {
            let mut best = -INF;
            for pos in board.empty_cells() {
                let child = board.with_mark(pos, self.side);
                best = best.max(self.alpha_beta(&child, false, alpha, beta));
                alpha = alpha.max(best);
                if alpha >= beta {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for pos in board.empty_cells() {
                let child = board.with_mark(pos, self.side.opponent());
                best = best.min(self.alpha_beta(&child, true, alpha, beta));
                beta = beta.min(best);
                if alpha >= beta {
                    break;
                }
            }
            best
        }
    }
}
