//! Board rendering for the Tic-Tac-Toe GUI

use crate::{Board, Cell, Mark, Pos, WinningLine, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the 3x3 grid.
///
/// Holds only layout state. Cell contents are read from the `Board` on
/// every frame.
pub struct BoardView {
    /// Side length of one cell
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: MAX_CELL_SIZE,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<WinningLine>,
        accepting_input: bool,
    ) -> Option<Pos> {
        let available = ui.available_size();
        let gaps = CELL_SPACING * (BOARD_SIZE as f32 - 1.0);
        let fit = (available.x.min(available.y) - gaps) / BOARD_SIZE as f32;
        self.cell_size = fit.clamp(40.0, MAX_CELL_SIZE);

        let side = self.cell_size * BOARD_SIZE as f32 + gaps;
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = response.rect;

        let hovered = if accepting_input {
            response
                .hover_pos()
                .and_then(|p| self.screen_to_board(p))
                .filter(|&pos| board.is_empty(pos))
        } else {
            None
        };
        let pressed = response.is_pointer_button_down_on();

        for pos in Pos::all() {
            let fill = if winning_line.is_some_and(|line| line.contains(pos)) {
                WIN_HIGHLIGHT
            } else if hovered == Some(pos) {
                if pressed {
                    CELL_PRESSED
                } else {
                    CELL_HOVER
                }
            } else {
                CELL_BG
            };
            self.draw_cell(&painter, pos, fill);

            if let Cell::Marked(mark) = board.get(pos) {
                self.draw_mark(&painter, pos, mark);
            }
        }

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if accepting_input && response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|p| self.screen_to_board(p));
        }

        None
    }

    /// Draw a single rounded cell tile
    fn draw_cell(&self, painter: &Painter, pos: Pos, fill: Color32) {
        painter.rect_filled(
            self.cell_rect(pos),
            CornerRadius::same(CELL_CORNER_RADIUS),
            fill,
        );
    }

    /// Draw X or O centered in the cell
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark) {
        let color = match mark {
            Mark::X => MARK_X,
            Mark::O => MARK_O,
        };
        painter.text(
            self.cell_rect(pos).center(),
            egui::Align2::CENTER_CENTER,
            mark.symbol(),
            egui::FontId::proportional(self.cell_size * MARK_FONT_RATIO),
            color,
        );
    }

    /// Small dot in the corner of the most recent move
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let inset = self.cell_size * 0.15;
        let center = Pos2::new(rect.max.x - inset, rect.min.y + inset);
        painter.circle_filled(center, 4.0, LAST_MOVE_MARKER);
    }

    /// Screen rectangle of a cell
    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let step = self.cell_size + CELL_SPACING;
        let min = self.board_rect.min + Vec2::new(pos.col as f32 * step, pos.row as f32 * step);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a cell. Points in the gaps map to `None`.
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }

        let step = self.cell_size + CELL_SPACING;
        let col = (relative.x / step).floor() as usize;
        let row = (relative.y / step).floor() as usize;

        Pos::try_new(row, col).filter(|&pos| self.cell_rect(pos).contains(screen_pos))
    }
}
