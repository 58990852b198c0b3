/// Catalog file name, shared by every data source.
pub const CATALOG_RESOURCE: &str = "Credit-Card-Products.csv";

/// Shown when a non-empty query matches nothing in the catalog.
pub const NO_RESULTS_MESSAGE: &str = "No Offers Available on this credit card.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub name: String,              // "Credit Card Name" column, may be empty
    pub visa_type: Option<String>, // Tier label, e.g. "Visa Gold"
    pub rating: Option<String>,    // Display-only
}

impl CardRecord {
    /// Rows without a name stay in the corpus but never match a query.
    pub fn is_matchable(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn tier(&self) -> CardTier {
        CardTier::from_label(self.visa_type.as_deref().unwrap_or(""))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferRecord {
    pub title: String,
    pub image: String, // URL
    pub link: String,  // URL
}

/// Card tiers, each backed by its own offers file. `Standard` is the
/// catch-all for blank or unrecognized labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTier {
    Gold,
    Platinum,
    Signature,
    Infinite,
    Standard,
}

impl CardTier {
    /// Exact, case-sensitive match on the catalog's "Visa type" value.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Visa Gold" => CardTier::Gold,
            "Visa Platinum" => CardTier::Platinum,
            "Visa Signature" => CardTier::Signature,
            "Visa Infinite" => CardTier::Infinite,
            _ => CardTier::Standard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardTier::Gold => "Visa Gold",
            CardTier::Platinum => "Visa Platinum",
            CardTier::Signature => "Visa Signature",
            CardTier::Infinite => "Visa Infinite",
            CardTier::Standard => "Visa Standard",
        }
    }

    pub fn resource_name(&self) -> &'static str {
        match self {
            CardTier::Gold => "Visa Gold.csv",
            CardTier::Platinum => "Visa Platinum.csv",
            CardTier::Signature => "Visa Signature.csv",
            CardTier::Infinite => "Visa Infinite.csv",
            CardTier::Standard => "Visa Standard.csv",
        }
    }
}
