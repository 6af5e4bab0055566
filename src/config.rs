//! Command-line configuration for the desktop app

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Window title, as shown by the OS
pub const WINDOW_TITLE: &str = "XO Game - Tic Tac Toe";

/// Tic-Tac-Toe against an unbeatable computer opponent
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tictactoe")]
#[command(about = "Play Tic-Tac-Toe against the computer", long_about = None)]
#[command(version)]
pub struct AppConfig {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 500.0)]
    pub width: f32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 600.0)]
    pub height: f32,

    /// Log filter directives (e.g. "debug" or "tictactoe=trace").
    /// Falls back to RUST_LOG, then "info".
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 600.0,
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Build the tracing filter from the flag, RUST_LOG, or the default
    pub fn env_filter(&self) -> EnvFilter {
        match &self.log_filter {
            Some(directives) => {
                EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
            }
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        }
    }

    /// Native window options for eframe
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.width, self.height])
                .with_min_inner_size([360.0, 460.0])
                .with_title(WINDOW_TITLE),
            ..Default::default()
        }
    }
}
