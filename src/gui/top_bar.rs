use eframe::egui;

use crate::gui::theme::Theme;

const HOME_URL: &str = "https://www.myrupaya.in/";

pub enum TopBarAction {
    OpenSettings,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, theme: &Theme) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(theme.heading(ctx, "CardScout").size(18.0).strong());
                ui.add_space(16.0);
                ui.hyperlink_to("Home", HOME_URL);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Settings").clicked() {
                        action = Some(TopBarAction::OpenSettings);
                    }
                });
            });
        });

        action
    }
}
