#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod cache;
mod carousel;
mod config;
mod error;
mod fetch;
mod model;
mod prelude;
mod slider;
mod source;
mod ui;
mod view;

use crate::prelude::*;
use clap::Parser;

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;
    log::info!(
        "Starting with url={:?} page={} limit={}",
        settings.url,
        settings.page,
        settings.limit
    );

    // Fetch and image tasks are spawned from the UI thread.
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([WIN_WIDTH, WIN_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(SliderApp::new(cc, settings)))),
    )
    .map_err(|e| AppError::Ui(e.to_string()))
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();

    log::info!("Initialising...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
