#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use spotlight_tour::{SpotlightApp, TourConfig, TourDefinition, TourResult};

/// Usage: `spotlight_tour [TOUR.json] [CONFIG.json]`
fn load_inputs() -> TourResult<(TourConfig, Option<TourDefinition>)> {
    let mut args = std::env::args().skip(1);
    let definition = args.next().map(TourDefinition::load).transpose()?;
    let config = match args.next() {
        Some(path) => TourConfig::load(path)?,
        None => TourConfig::default(),
    };
    Ok((config, definition))
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let (config, definition) = match load_inputs() {
        Ok(inputs) => inputs,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Spotlight Tour",
        native_options,
        Box::new(move |cc| Ok(Box::new(SpotlightApp::new(cc, config, definition)?))),
    )
}
