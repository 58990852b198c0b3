use eframe::egui;

use crate::{
    core::models::OfferRecord,
    gui::theme::Theme,
};

const CARD_WIDTH: f32 = 220.0;
const IMAGE_HEIGHT: f32 = 120.0;

/// Grid of offer cards for the selected card's tier. Links open in the
/// system browser.
pub fn show(ui: &mut egui::Ui, theme: &Theme, tier_label: &str, offers: &[OfferRecord]) {
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(theme.heading(ui.ctx(), &format!("{} Offers", tier_label)).size(16.0));
    });
    ui.add_space(8.0);

    egui::ScrollArea::vertical().id_salt("offers_grid").show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for offer in offers {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.vertical(|ui| {
                        if !offer.image.is_empty() {
                            ui.add(
                                egui::Image::new(offer.image.as_str())
                                    .max_width(CARD_WIDTH)
                                    .max_height(IMAGE_HEIGHT),
                            );
                        }

                        ui.label(theme.bold(ui.ctx(), &offer.title));

                        if !offer.link.is_empty() {
                            ui.hyperlink_to("View Offer", &offer.link);
                        }
                    });
                });
            }
        });
    });
}
