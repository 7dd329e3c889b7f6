mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use app::HeatGridApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1500.0, 800.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "HeatGrid – Global Temperature",
        options,
        Box::new(|cc| Ok(Box::new(HeatGridApp::new(&cc.egui_ctx)))),
    )
}
