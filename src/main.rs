mod app;
mod color;
mod config;
mod contact;
mod data;
mod download;
mod format;
mod store;
mod ui;

use app::CyberAnalyticsApp;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = Config::load().unwrap_or_else(|e| {
        log::warn!("Ignoring invalid configuration: {e}");
        Config::default()
    });
    config.apply_args(std::env::args_os().skip(1));
    log::info!("Using sector data at {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CyberAnalytics – Analyse des Cyberattaques par Secteur",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the chart PNGs.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(CyberAnalyticsApp::new(config)))
        }),
    )
}
