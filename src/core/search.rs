use std::time::{
    Duration,
    Instant,
};

use super::{
    debounce::Debouncer,
    models::{
        CardRecord,
        CardTier,
        OfferRecord,
        NO_RESULTS_MESSAGE,
    },
};

/// A tier fetch the controller wants issued. `generation` identifies
/// the selection that asked for it; a result coming back with an older
/// generation is discarded instead of overwriting fresh state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferRequest {
    pub tier: CardTier,
    pub generation: u64,
}

/// Owns all search/selection state. The GUI only reads through the
/// accessors and mutates through the operations, so every transition
/// (debounce commit, filter recompute, selection, offers arrival) goes
/// through one place.
pub struct SearchController {
    catalog: Vec<CardRecord>,
    raw_query: String,
    debounced_query: String,
    debouncer: Debouncer,
    matches: Vec<usize>,
    selected: Option<usize>,
    offers: Vec<OfferRecord>,
    empty_message: Option<&'static str>,
    generation: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::with_window(super::debounce::DEBOUNCE_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            catalog: Vec::new(),
            raw_query: String::new(),
            debounced_query: String::new(),
            debouncer: Debouncer::with_window(window),
            matches: Vec::new(),
            selected: None,
            offers: Vec::new(),
            empty_message: None,
            generation: 0,
        }
    }

    /// Publish the catalog. Happens once in practice, but a source
    /// change may replace it; either way the current query is
    /// re-filtered against the new corpus.
    pub fn catalog_loaded(&mut self, catalog: Vec<CardRecord>) {
        self.catalog = catalog;
        self.selected = None;
        self.offers.clear();
        self.generation += 1;
        self.recompute_matches();
    }

    /// A keystroke. The input text updates immediately; the filter only
    /// recomputes once the debounce window elapses. Typing invalidates
    /// any selection and its offers on the spot.
    pub fn set_query(&mut self, text: &str, now: Instant) {
        self.raw_query = text.to_string();
        self.selected = None;
        self.offers.clear();
        self.generation += 1;
        self.debouncer.schedule(self.raw_query.clone(), now);
    }

    /// Advance the debounce clock; called every frame.
    pub fn poll(&mut self, now: Instant) {
        if let Some(query) = self.debouncer.poll(now) {
            self.debounced_query = query;
            self.recompute_matches();
        }
    }

    /// Pick a card out of the dropdown by its displayed name. Returns
    /// the offers fetch to issue, or None when the name is not in the
    /// catalog (should not happen since the name came from a rendered
    /// match, but a miss must degrade to "no selection").
    pub fn select_card(&mut self, name: &str) -> Option<OfferRequest> {
        self.raw_query = name.to_string();
        self.debounced_query = name.to_string();
        self.debouncer.cancel();
        self.matches.clear();
        self.empty_message = None;
        self.offers.clear();
        self.generation += 1;

        self.selected = self.catalog.iter().position(|card| card.name == name);
        let card = self.selected.map(|index| &self.catalog[index])?;

        Some(OfferRequest { tier: card.tier(), generation: self.generation })
    }

    /// Publish a finished offers fetch. Returns false when the result
    /// belonged to a superseded selection and was dropped.
    pub fn offers_loaded(&mut self, generation: u64, offers: Vec<OfferRecord>) -> bool {
        if generation != self.generation || self.selected.is_none() {
            return false;
        }

        self.offers = offers;
        true
    }

    fn recompute_matches(&mut self) {
        self.matches.clear();

        if self.debounced_query.is_empty() {
            self.empty_message = None;
            return;
        }

        let query = self.debounced_query.to_lowercase();
        let terms: Vec<&str> = query.split_whitespace().collect();

        for (index, card) in self.catalog.iter().enumerate() {
            if !card.is_matchable() {
                continue;
            }

            let name = card.name.to_lowercase();
            if terms.iter().all(|term| name.contains(term)) {
                self.matches.push(index);
            }
        }

        self.empty_message = if self.matches.is_empty() { Some(NO_RESULTS_MESSAGE) } else { None };
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn matches(&self) -> impl Iterator<Item = &CardRecord> + '_ {
        self.matches.iter().map(|&index| &self.catalog[index])
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn selected(&self) -> Option<&CardRecord> {
        self.selected.map(|index| &self.catalog[index])
    }

    pub fn offers(&self) -> &[OfferRecord] {
        &self.offers
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.empty_message
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.next_deadline()
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}
