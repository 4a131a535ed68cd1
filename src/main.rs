mod app;
mod color;
mod data;
mod ml;
mod session;
mod stats;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use app::SteerageApp;
use eframe::egui;

/// Dataset location when no path is given on the command line.
const DEFAULT_DATASET: &str = "data/titanic.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // The dataset is fixed configuration: without it there is nothing to
    // serve, so a load failure ends the process.
    let dataset = match data::loader::load_file(&path) {
        Ok(dataset) => {
            log::info!("loaded {} passengers from {}", dataset.len(), path.display());
            Arc::new(dataset)
        }
        Err(err) => {
            log::error!("failed to load dataset: {err:#}");
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Steerage – Titanic Survival Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(SteerageApp::new(dataset)))),
    )
}
