//! Terminal status detection

use crate::board::{Board, Mark};

use super::win::{find_winning_line, WinningLine};

/// Game status derived from a board. Never cached: recompute after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won { winner: Mark, line: WinningLine },
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    #[inline]
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    #[inline]
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Classify a board as won, drawn, or still in progress.
///
/// X is checked before O. On boards reachable by legal play at most one of
/// them can have a completed line.
pub fn terminal_status(board: &Board) -> GameStatus {
    for mark in [Mark::X, Mark::O] {
        if let Some(line) = find_winning_line(board, mark) {
            return GameStatus::Won { winner: mark, line };
        }
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Marked(Mark::X);
    const O: Cell = Cell::Marked(Mark::O);

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(terminal_status(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_human_completes_top_row() {
        let mut board = Board::from_cells([[X, X, E], [O, O, E], [E, E, E]]);
        board.place(Pos::new(0, 2), Mark::X);

        let status = terminal_status(&board);
        assert_eq!(status.winner(), Some(Mark::X));
        assert_eq!(
            status.winning_line().map(|l| l.0),
            Some([Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)])
        );
        assert!(status.is_terminal());
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(terminal_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let board = Board::from_cells([[X, O, X], [O, X, O], [O, X, X]]);
        let status = terminal_status(&board);
        assert_eq!(status.winner(), Some(Mark::X));
    }

    #[test]
    fn test_opponent_diagonal_win() {
        let board = Board::from_cells([[O, X, X], [E, O, X], [E, E, O]]);
        let status = terminal_status(&board);
        assert_eq!(status.winner(), Some(Mark::O));
        assert_eq!(
            status.winning_line().map(|l| l.0),
            Some([Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)])
        );
    }

    #[test]
    fn test_reset_then_in_progress() {
        let mut board = Board::from_cells([[O, X, X], [E, O, X], [E, E, O]]);
        board.reset();
        assert_eq!(terminal_status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_partial_board_in_progress() {
        let board = Board::from_cells([[X, O, E], [E, X, E], [E, E, O]]);
        let status = terminal_status(&board);
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(status.winner(), None);
        assert_eq!(status.winning_line(), None);
    }
}
