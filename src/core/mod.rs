pub mod debounce;
pub mod errors;
pub mod models;
pub mod search;
pub mod source;
pub mod table;
pub mod tasks;

pub use errors::ScoutError;
pub use models::{
    CardRecord,
    CardTier,
    OfferRecord,
};

#[cfg(test)]
mod search_tests;
