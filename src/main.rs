use eframe::egui;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod catalog;
mod config;
mod io;
mod route;
mod state;
mod style;
mod view;

use app::GreengrocerApp;
use config::Config;

/// One-time structured logging setup with `RUST_LOG` support.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("greengrocer=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

fn main() -> eframe::Result<()> {
    init_logging();

    let config = Config::load();
    tracing::info!(api = %config.api.base_url, "starting greengrocer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Greengrocer"),
        ..Default::default()
    };

    eframe::run_native(
        "Greengrocer",
        options,
        Box::new(|cc| Ok(Box::new(GreengrocerApp::new(cc, config)))),
    )
}
