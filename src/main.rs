//! Gomoku GUI
//!
//! Play five-in-a-row against the computer.

use clap::Parser;
use gomoku::ui::GomokuApp;
use gomoku::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let config = AppConfig::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(seed = ?config.seed, ai_delay_ms = config.ai_delay_ms, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
}
