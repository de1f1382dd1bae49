use derive_more::{Display, From};
use log::warn;
use serde::Deserialize;
use serde_json::Value;

pub const UNKNOWN_SELLER: &str = "Unknown seller";

/// A single seller's quote for the tracked product.
#[derive(Clone, Debug, PartialEq)]
pub struct Offer {
    pub price: Price,
    pub seller: String,
}

/// Price in CZK. Offers without a usable price carry the unbounded
/// sentinel, which renders as `inf`.
#[derive(Clone, Copy, Debug, PartialEq, Display, From)]
#[display("{_0:?}")]
pub struct Price(pub f64);

impl Price {
    pub const UNKNOWN: Self = Price(f64::INFINITY);
}

/// The `offers` attribute comes in two shapes: a bare array of offers,
/// or a wrapper object holding the array under another `offers` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum OffersNode {
    List(Vec<Value>),
    Wrapper { offers: Vec<Value> },
}

impl OffersNode {
    fn into_elements(self) -> Vec<Value> {
        match self {
            OffersNode::List(elements) => elements,
            OffersNode::Wrapper { offers } => offers,
        }
    }
}

/// Normalizes the structured data of the page into a list of offers.
///
/// `None` in means no structured data was found and maps to `None` out,
/// as opposed to `Some(vec![])`, a page advertising zero offers.
/// Malformed elements are skipped with a diagnostic; the rest of the
/// list still goes through.
pub fn extract_offers(data: Option<&Value>) -> Option<Vec<Offer>> {
    let data = data?;

    let elements = match data.get("offers") {
        Some(node) => match OffersNode::deserialize(node) {
            Ok(node) => node.into_elements(),
            Err(_) => {
                warn!("Unexpected shape of the offers attribute: {node}");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    Some(elements.iter().filter_map(offer_from_element).collect())
}

fn offer_from_element(element: &Value) -> Option<Offer> {
    let Value::Object(record) = element else {
        warn!("Skipping offer element with unexpected format: {element}");
        return None;
    };

    let price = record.get("price").map_or(Price::UNKNOWN, price_from_value);
    let seller = match record.get("offeredBy") {
        Some(Value::String(name)) => name.clone(),
        _ => UNKNOWN_SELLER.to_owned(),
    };

    Some(Offer { price, seller })
}

// JSON-LD publishers emit prices both as numbers and as numeric strings.
fn price_from_value(value: &Value) -> Price {
    match value {
        Value::Number(number) => number.as_f64().map_or(Price::UNKNOWN, Price),
        Value::String(text) => text.trim().parse().map_or(Price::UNKNOWN, Price),
        _ => Price::UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offer(price: f64, seller: &str) -> Offer {
        Offer {
            price: Price(price),
            seller: seller.to_owned(),
        }
    }

    #[test]
    fn extracts_offers_from_direct_list() {
        let data = json!({
            "offers": [
                {"price": 44.9, "offeredBy": "ShopA"},
                {"price": 39.0, "offeredBy": "ShopB"},
            ]
        });

        assert_eq!(
            extract_offers(Some(&data)),
            Some(vec![offer(44.9, "ShopA"), offer(39.0, "ShopB")]),
        );
    }

    #[test]
    fn unwraps_wrapped_offers_list() {
        let direct = json!({
            "offers": [{"price": 44.9, "offeredBy": "ShopA"}]
        });
        let wrapped = json!({
            "offers": {"offers": [{"price": 44.9, "offeredBy": "ShopA"}]}
        });

        assert_eq!(extract_offers(Some(&wrapped)), extract_offers(Some(&direct)));
    }

    #[test]
    fn skips_elements_that_are_not_records() {
        let data = json!({
            "offers": [{"price": 10, "offeredBy": "ShopA"}, "not an offer"]
        });

        assert_eq!(extract_offers(Some(&data)), Some(vec![offer(10.0, "ShopA")]));
    }

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let data = json!({"offers": [{}]});

        let offers = extract_offers(Some(&data)).unwrap();
        assert_eq!(offers, vec![offer(f64::INFINITY, UNKNOWN_SELLER)]);
    }

    #[test]
    fn accepts_prices_encoded_as_strings() {
        let data = json!({
            "offers": [{"price": "44.90", "offeredBy": "ShopA"}]
        });

        assert_eq!(extract_offers(Some(&data)), Some(vec![offer(44.9, "ShopA")]));
    }

    #[test]
    fn absent_structured_data_stays_absent() {
        assert_eq!(extract_offers(None), None);
    }

    #[test]
    fn structured_data_without_offers_yields_empty_list() {
        let data = json!({"name": "Monster Energy"});

        assert_eq!(extract_offers(Some(&data)), Some(vec![]));
    }
}
