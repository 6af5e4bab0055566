//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Window - black background, white text
pub const BACKGROUND: Color32 = Color32::from_rgb(0, 0, 0);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(150, 150, 155);

// Cells - white rounded tiles
pub const CELL_BG: Color32 = Color32::from_rgb(255, 255, 255);
pub const CELL_HOVER: Color32 = Color32::from_rgb(240, 240, 240);
pub const CELL_PRESSED: Color32 = Color32::from_rgb(224, 224, 224);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 255, 0);

// Marks
pub const MARK_X: Color32 = Color32::from_rgb(255, 0, 0);
pub const MARK_O: Color32 = Color32::from_rgb(0, 0, 255);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(120, 120, 125);

// Buttons
pub const BUTTON_BG: Color32 = Color32::from_rgb(255, 255, 255);
pub const BUTTON_TEXT: Color32 = Color32::from_rgb(0, 0, 0);

// Status colors
pub const STATUS_TURN: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WIN: Color32 = Color32::from_rgb(255, 220, 60);
pub const STATUS_LOSS: Color32 = Color32::from_rgb(255, 90, 90);

// Sizes
pub const WINDOW_MARGIN: f32 = 30.0;
pub const CELL_SPACING: f32 = 15.0;
pub const MAX_CELL_SIZE: f32 = 130.0;
pub const CELL_CORNER_RADIUS: u8 = 20;
pub const MARK_FONT_RATIO: f32 = 0.5;
pub const TITLE_FONT_SIZE: f32 = 28.0;
pub const STATUS_FONT_SIZE: f32 = 20.0;
pub const BUTTON_FONT_SIZE: f32 = 18.0;
