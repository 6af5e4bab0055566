//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::game::{Game, Phase, HUMAN};
use crate::GameStatus;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    game: Game,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            game: Game::new(),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self) {
        self.game.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Engine Info (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Move #{}", self.game.move_count()));
                });
            });
        });
    }

    /// Render last engine search stats
    fn render_debug_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("engine_info")
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)).inner_margin(8.0))
            .show(ctx, |ui| {
                match self.game.last_engine_result() {
                    Some(result) => {
                        let mv = result
                            .best_move
                            .map_or_else(|| "-".to_string(), |pos| pos.to_string());
                        ui.label(
                            RichText::new(format!(
                                "Bot move {}  score {:+}  {} nodes  {}ms",
                                mv, result.score, result.nodes, result.time_ms
                            ))
                            .size(11.0)
                            .color(TEXT_MUTED),
                        );
                    }
                    None => {
                        ui.label(RichText::new("Waiting for first move...").size(11.0).color(TEXT_MUTED));
                    }
                }
            });
    }

    /// Status label color for the current phase
    fn status_color(&self) -> egui::Color32 {
        match self.game.phase() {
            Phase::AwaitingHuman | Phase::AwaitingOpponent => STATUS_TURN,
            Phase::Finished(GameStatus::Won { winner, .. }) if winner == HUMAN => STATUS_WIN,
            Phase::Finished(GameStatus::Won { .. }) => STATUS_LOSS,
            Phase::Finished(_) => TEXT_PRIMARY,
        }
    }

    /// Render the new game button, returns true when clicked
    fn render_new_game_button(ui: &mut egui::Ui) -> bool {
        let mut clicked = false;
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(CELL_CORNER_RADIUS))
            .inner_margin(15.0)
            .show(ui, |ui| {
                let label = egui::Label::new(
                    RichText::new("New Game").size(BUTTON_FONT_SIZE).strong().color(BUTTON_TEXT),
                )
                .sense(egui::Sense::click());
                clicked = ui.add(label).clicked();
            });
        clicked
    }

    /// Render title, status, board and button
    fn render_main(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BACKGROUND).inner_margin(WINDOW_MARGIN))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Tic Tac Toe").size(TITLE_FONT_SIZE).strong().color(TEXT_PRIMARY));
                    ui.add_space(10.0);
                    ui.label(RichText::new(self.game.status_text()).size(STATUS_FONT_SIZE).color(self.status_color()));
                    ui.add_space(20.0);

                    let accepting = self.game.phase() == Phase::AwaitingHuman;
                    let clicked = self.board_view.show(
                        ui,
                        self.game.board(),
                        self.game.last_move(),
                        self.game.winning_line(),
                        accepting,
                    );

                    if let Some(pos) = clicked {
                        if let Err(err) = self.game.human_move(pos) {
                            debug!(%pos, %err, "click ignored");
                        }
                    }

                    ui.add_space(25.0);
                    if Self::render_new_game_button(ui) {
                        self.new_game();
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle_debug) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::D)));

        if new_game {
            self.new_game();
        }
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        if self.show_debug {
            self.render_debug_panel(ctx);
        }
        self.render_main(ctx);
    }
}
