#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod io;
mod model;
mod ui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 540.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title("Day Scrubber"),
        ..Default::default()
    };

    eframe::run_native(
        "Day Scrubber",
        options,
        Box::new(|cc| Ok(Box::new(app::ScrubberApp::new(cc)))),
    )
}
