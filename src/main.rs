use inkpad::draw::canvas::Canvas;
use inkpad::draw::codec;
use inkpad::gui::SketchApp;
use inkpad::logging;
use inkpad::settings::{self, Settings};

use eframe::egui;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let settings_path = settings::resolve_settings_path().ok();
    let settings = match &settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    logging::init(settings.debug_logging);

    let canvas = launch_canvas(&settings);
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Inkpad")
            .with_inner_size([width.max(480.0), height + 48.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Inkpad",
        native_options,
        Box::new(move |_cc| Box::new(SketchApp::new(canvas, settings, settings_path))),
    )
    .map_err(|err| anyhow::anyhow!("run ui: {err}"))
}

/// A file passed on the command line is opened straight into the canvas;
/// anything unreadable falls back to a blank sheet.
fn launch_canvas(settings: &Settings) -> Canvas {
    let blank =
        || Canvas::new(settings.canvas_width, settings.canvas_height, settings.background);
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match codec::load_canvas(&path) {
            Ok(canvas) => {
                tracing::info!("opened {} at launch", path.display());
                canvas
            }
            Err(err) => {
                tracing::warn!("could not open {} at launch: {:#}", path.display(), err);
                blank()
            }
        },
        None => blank(),
    }
}
