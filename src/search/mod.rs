//! Search module for the Tic-Tac-Toe AI
//!
//! Contains the exhaustive minimax searcher. The 3x3 tree is small enough
//! to solve completely on every move, so there is no depth limit, no
//! transposition table and no time management.

pub mod minimax;

pub use minimax::{score, SearchResult, Searcher};
