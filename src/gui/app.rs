use std::time::Instant;

use eframe::egui;

use super::{
    card_details,
    message_overlay::MessageOverlay,
    offers_grid,
    search_panel::{
        SearchAction,
        SearchPanel,
    },
    settings::SettingsData,
    settings_modal::SettingsModal,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        search::SearchController,
        source::DataSource,
        tasks::{
            TaskManager,
            TaskResult,
        },
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct CardScoutApp {
    controller: SearchController,
    settings_data: SettingsData,
    theme: Theme,
    message_overlay: MessageOverlay,
    settings_modal: SettingsModal,
    task_manager: TaskManager,
}

impl CardScoutApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>("settings.json");

        let task_manager = TaskManager::new();
        task_manager.load_catalog(DataSource::from_setting(&settings_data.data_source));

        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, theme.clone());
        apply_theme_preference(&cc.egui_ctx, settings_data.dark_mode);

        Self {
            controller: SearchController::new(),
            settings_data,
            theme,
            message_overlay: MessageOverlay::new(),
            settings_modal: SettingsModal::new(),
            task_manager,
        }
    }

    fn data_source(&self) -> DataSource {
        DataSource::from_setting(&self.settings_data.data_source)
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::CatalogLoaded(Ok(cards)) => {
                println!("Loaded {} cards from catalog", cards.len());
                self.controller.catalog_loaded(cards);
                self.message_overlay.clear_message();
            }
            TaskResult::CatalogLoaded(Err(e)) => {
                // Search just returns zero matches on an empty corpus
                eprintln!("Error fetching catalog: {}", e);
                self.controller.catalog_loaded(Vec::new());
                self.message_overlay.clear_message();
            }
            TaskResult::OffersLoaded { generation, result } => match result {
                Ok(offers) => {
                    if !self.controller.offers_loaded(generation, offers) {
                        println!("Dropped offers for a superseded selection");
                    }
                }
                Err(e) => {
                    eprintln!("Error fetching offers: {}", e);
                }
            },
        }
    }

    fn handle_search_action(&mut self, action: SearchAction, now: Instant) {
        match action {
            SearchAction::QueryChanged(text) => {
                self.controller.set_query(&text, now);
            }
            SearchAction::CardSelected(name) => {
                if let Some(request) = self.controller.select_card(&name) {
                    self.task_manager.load_offers(
                        self.data_source(),
                        request.tier,
                        request.generation,
                    );
                }
            }
        }
    }

    fn apply_settings(&mut self, ctx: &egui::Context, settings: SettingsData) {
        let source_changed = settings.data_source != self.settings_data.data_source;
        self.settings_data = settings;

        apply_theme_preference(ctx, self.settings_data.dark_mode);

        if let Err(e) = save_json(&self.settings_data, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }

        if source_changed {
            self.message_overlay.set_message("Loading card catalog...".to_string());
            self.task_manager.load_catalog(self.data_source());
        }
    }
}

fn apply_theme_preference(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_theme(if dark_mode { egui::Theme::Dark } else { egui::Theme::Light });
}

impl eframe::App for CardScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        let now = Instant::now();
        self.controller.poll(now);

        // Wake up again when the debounce window elapses, otherwise the
        // commit would wait for the next input event.
        if let Some(deadline) = self.controller.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }

        if let Some(action) = TopBar::show(ctx, &self.theme) {
            match action {
                TopBarAction::OpenSettings => {
                    self.settings_modal.open_settings(self.settings_data.clone());
                }
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.label(self.theme.heading(ctx, "Card Offers").size(24.0).strong());
            });
            ui.add_space(12.0);

            if let Some(action) = SearchPanel::show(ui, &self.controller, &self.theme) {
                self.handle_search_action(action, now);
            }

            if let Some(card) = self.controller.selected() {
                let tier_label = card.tier().label();
                card_details::show(ui, &self.theme, card);

                if !self.controller.offers().is_empty() {
                    offers_grid::show(ui, &self.theme, tier_label, self.controller.offers());
                }
            }
        });

        self.message_overlay.show(ctx, &self.theme);

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.apply_settings(ctx, settings);
        }
    }
}
