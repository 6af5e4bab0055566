//! Win condition checking
//!
//! A mark wins by occupying all three cells of any row, column, or diagonal.

use crate::board::{Board, Cell, Mark, Pos};

/// The 8 winning lines as (row, col) triples.
///
/// Scan order is fixed: rows top to bottom, columns left to right,
/// main diagonal, anti-diagonal. Cells within a line are listed in
/// ascending row (or column, for rows) order.
pub const LINES: [[(u8, u8); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The three coordinates of a completed line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine(pub [Pos; 3]);

impl WinningLine {
    #[inline]
    pub fn cells(&self) -> &[Pos; 3] {
        &self.0
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.0.contains(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.0.iter().copied()
    }
}

/// Find the first completed line for `mark`, in `LINES` order
pub fn find_winning_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    let target = Cell::Marked(mark);

    for line in LINES {
        let cells = line.map(|(r, c)| Pos::new(r, c));
        if cells.iter().all(|&pos| board.get(pos) == target) {
            return Some(WinningLine(cells));
        }
    }
    None
}

/// Check if `mark` has three in a row anywhere
#[inline]
pub fn has_three_in_row(board: &Board, mark: Mark) -> bool {
    find_winning_line(board, mark).is_some()
}
