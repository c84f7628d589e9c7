mod app;
mod commands;
mod config;
mod preview;
mod properties;
mod shortcuts;
mod state;
mod theme;
mod timeline;
mod toolbar;

use std::path::Path;

use anyhow::Context as _;

use app::FioraApp;
use config::AppConfig;

fn load_window_icon(path: &Path) -> anyhow::Result<egui::IconData> {
    let icon = image::open(path)
        .with_context(|| format!("failed to load window icon {}", path.display()))?
        .into_rgba8();
    let (width, height) = icon.dimensions();

    Ok(egui::IconData {
        rgba: icon.into_raw(),
        width,
        height,
    })
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load();

    let width = config.window_width.unwrap_or(1200.0);
    let height = config.window_height.unwrap_or(750.0);

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Fiora Editor")
        .with_app_id("fiora")
        .with_inner_size([width, height])
        .with_min_inner_size([900.0, 600.0]);

    // A missing icon only costs the window its custom icon.
    match load_window_icon(&config.icon_path()) {
        Ok(icon) => viewport = viewport.with_icon(icon),
        Err(err) => tracing::warn!("{:#}", err),
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "fiora",
        native_options,
        Box::new(|cc| Ok(Box::new(FioraApp::new(cc, config)))),
    )
}
