use csv::StringRecord;

use super::{
    errors::ScoutError,
    models::{
        CardRecord,
        OfferRecord,
    },
};

const NAME_COLUMN: &str = "Credit Card Name";
const VISA_TYPE_COLUMN: &str = "Visa type";
const RATING_COLUMN: &str = "Rating";

const TITLE_COLUMN: &str = "Title";
const IMAGE_COLUMN: &str = "Image";
const LINK_COLUMN: &str = "Link";

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| header.trim() == name)
}

fn field(record: &StringRecord, index: Option<usize>) -> String {
    index.and_then(|i| record.get(i)).unwrap_or("").trim().to_string()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Parse the catalog file: first row is the header, each following row
/// is one card. Headers are not validated; a missing column just means
/// every record gets an empty value for it.
pub fn parse_cards(data: &[u8]) -> Result<Vec<CardRecord>, ScoutError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);
    let headers = reader.headers()?.clone();

    let name_idx = column_index(&headers, NAME_COLUMN);
    let visa_type_idx = column_index(&headers, VISA_TYPE_COLUMN);
    let rating_idx = column_index(&headers, RATING_COLUMN);

    let mut cards = Vec::new();
    for result in reader.records() {
        let record = result?;
        cards.push(CardRecord {
            name: field(&record, name_idx),
            visa_type: non_empty(field(&record, visa_type_idx)),
            rating: non_empty(field(&record, rating_idx)),
        });
    }

    Ok(cards)
}

/// Parse a per-tier offers file. Rows with no content at all (trailing
/// blank lines and the like) are dropped.
pub fn parse_offers(data: &[u8]) -> Result<Vec<OfferRecord>, ScoutError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);
    let headers = reader.headers()?.clone();

    let title_idx = column_index(&headers, TITLE_COLUMN);
    let image_idx = column_index(&headers, IMAGE_COLUMN);
    let link_idx = column_index(&headers, LINK_COLUMN);

    let mut offers = Vec::new();
    for result in reader.records() {
        let record = result?;
        let offer = OfferRecord {
            title: field(&record, title_idx),
            image: field(&record, image_idx),
            link: field(&record, link_idx),
        };

        if offer.title.is_empty() && offer.image.is_empty() && offer.link.is_empty() {
            continue;
        }

        offers.push(offer);
    }

    Ok(offers)
}
