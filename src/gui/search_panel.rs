use eframe::egui;

use crate::{
    core::search::SearchController,
    gui::theme::Theme,
};

/// What the user did this frame; the app feeds it back into the
/// controller (and the task manager, for selections).
pub enum SearchAction {
    QueryChanged(String),
    CardSelected(String),
}

pub struct SearchPanel;

impl SearchPanel {
    pub fn show(
        ui: &mut egui::Ui,
        controller: &SearchController,
        theme: &Theme,
    ) -> Option<SearchAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            // The buffer is rebuilt from the controller each frame so
            // the input reflects selections made elsewhere.
            let mut buffer = controller.raw_query().to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut buffer)
                    .hint_text("Enter credit card name")
                    .desired_width(420.0),
            );
            if response.changed() {
                action = Some(SearchAction::QueryChanged(buffer));
            }

            if controller.has_matches() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(420.0);
                    egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                        for card in controller.matches() {
                            if ui
                                .selectable_label(false, &card.name)
                                .on_hover_cursor(egui::CursorIcon::PointingHand)
                                .clicked()
                            {
                                action = Some(SearchAction::CardSelected(card.name.clone()));
                            }
                        }
                    });
                });
            }

            if controller.selected().is_none() {
                if let Some(message) = controller.empty_message() {
                    ui.add_space(8.0);
                    ui.colored_label(theme.red(ui.ctx()), message);
                }
            }
        });

        action
    }
}
