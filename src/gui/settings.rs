use serde::{
    Deserialize,
    Serialize,
};

/// Persisted as settings.json in the platform data dir.
#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub data_source: String, // Local directory or http(s) base URL
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { data_source: "data".to_string(), dark_mode: true }
    }
}
