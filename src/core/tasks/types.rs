use crate::core::models::{
    CardRecord,
    OfferRecord,
};

/// Results sent back from background fetch threads, polled by the GUI
/// once per frame. Errors travel as strings; the GUI only logs them.
#[derive(Debug, Clone)]
pub enum TaskResult {
    CatalogLoaded(Result<Vec<CardRecord>, String>),
    OffersLoaded { generation: u64, result: Result<Vec<OfferRecord>, String> },
}
