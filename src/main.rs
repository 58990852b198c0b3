mod core;
mod gui;
mod persistence;

use eframe::egui;

use crate::gui::app::CardScoutApp;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CardScout")
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CardScout",
        native_options,
        Box::new(|cc| Ok(Box::new(CardScoutApp::new(cc)))),
    )
}
