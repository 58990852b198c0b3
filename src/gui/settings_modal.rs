use eframe::egui;

use crate::gui::settings::SettingsData;

/// Edits the data source and theme preference. Returns the new
/// settings once on save; the app decides whether a catalog reload is
/// needed.
pub struct SettingsModal {
    open: bool,
    draft: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, draft: SettingsData::default() }
    }

    pub fn open_settings(&mut self, current: SettingsData) {
        self.draft = current;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut saved = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(400.0);

            ui.heading("Settings");
            ui.add_space(10.0);

            ui.label("Data source (directory or http base URL):");
            ui.text_edit_singleline(&mut self.draft.data_source);

            ui.add_space(5.0);
            ui.checkbox(&mut self.draft.dark_mode, "Dark mode");

            ui.add_space(15.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save").clicked() {
                    saved = Some(self.draft.clone());
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        saved
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
