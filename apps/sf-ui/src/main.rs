#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::ShearflowApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1500.0, 700.0])
            .with_title("Shearflow"),
        ..Default::default()
    };

    eframe::run_native(
        "Shearflow",
        options,
        Box::new(|cc| Ok(Box::new(ShearflowApp::new(cc)))),
    )
}
