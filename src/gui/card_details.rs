use eframe::egui;

use crate::{
    core::models::CardRecord,
    gui::theme::Theme,
};

pub fn show(ui: &mut egui::Ui, theme: &Theme, card: &CardRecord) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(420.0);

            ui.label(theme.heading(ui.ctx(), "Card Details").size(16.0));
            ui.add_space(6.0);

            egui::Grid::new("card_details_grid").num_columns(2).spacing([12.0, 4.0]).show(
                ui,
                |ui| {
                    ui.label("Card Name:");
                    ui.label(theme.bold(ui.ctx(), &card.name));
                    ui.end_row();

                    ui.label("Visa Type:");
                    match &card.visa_type {
                        Some(visa_type) => ui.label(visa_type),
                        None => ui.label(theme.muted(ui.ctx(), "No category found")),
                    };
                    ui.end_row();

                    ui.label("Rating:");
                    match &card.rating {
                        Some(rating) => {
                            ui.colored_label(theme.yellow(ui.ctx()), rating)
                        }
                        None => ui.label(theme.muted(ui.ctx(), "No rating available")),
                    };
                    ui.end_row();
                },
            );
        });
    });
}
