pub mod app;
pub mod card_details;
pub mod message_overlay;
pub mod offers_grid;
pub mod search_panel;
pub mod settings;
pub mod settings_modal;
pub mod theme;
pub mod top_bar;
