//! Board structure with placement validation

use tracing::debug;

use super::{Cell, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::MoveError;
use crate::rules::terminal_status;

/// 3x3 game board, cells stored in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from explicit rows (row 0 first)
    pub fn from_cells(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                board.cells[row * BOARD_SIZE + col] = cell;
            }
        }
        board
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Raw write with no validation.
    /// Use `try_place` or `place` for game moves.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Copy of this board with `mark` written at `pos`.
    /// Search explores hypothetical moves through this so the original is never touched.
    #[inline]
    pub fn with_mark(&self, pos: Pos, mark: Mark) -> Board {
        let mut next = *self;
        next.set(pos, Cell::Marked(mark));
        next
    }

    /// Place a mark, rejecting out-of-range, occupied, or post-game moves.
    /// The board is unchanged on error.
    pub fn try_place(&mut self, pos: Pos, mark: Mark) -> Result<(), MoveError> {
        if !pos.is_on_board() {
            return Err(MoveError::OutOfBounds {
                row: pos.row as usize,
                col: pos.col as usize,
            });
        }
        if terminal_status(self).is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.set(pos, Cell::Marked(mark));
        Ok(())
    }

    /// Silent form of `try_place`: invalid moves are ignored.
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        if let Err(err) = self.try_place(pos, mark) {
            debug!(%pos, %mark, %err, "ignored placement");
        }
    }

    /// Clear all 9 cells
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; TOTAL_CELLS];
    }

    /// Empty positions in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_empty(pos))
    }

    /// True once every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of cells holding `mark`
    #[inline]
    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| c.mark() == Some(mark))
            .count()
    }

    /// Total marks on board
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check if board has no marks
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.occupied_count() == 0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(row as u8, col as u8)) {
                    Cell::Empty => '.',
                    Cell::Marked(mark) => mark.symbol(),
                };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
