use crate::offers::Offer;

const HEADER: &str = "🎉 Monster Energy Drink is on sale!\n――――――――――――――――――\n";
const NO_OFFERS: &str = "No offers at the moment. 😭";

/// Renders the offer list into the text of a single post. Absent
/// structured data and an empty offer list read the same to the
/// audience: nothing on sale today.
pub fn format_message(offers: Option<&[Offer]>) -> String {
    let mut text = HEADER.to_owned();

    match offers {
        Some(offers) if !offers.is_empty() => {
            for offer in offers {
                text.push_str(&format!("» {}: Price: {} Kč\n", offer.seller, offer.price));
            }
        }
        _ => text.push_str(NO_OFFERS),
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offers::Price;

    fn offer(price: f64, seller: &str) -> Offer {
        Offer {
            price: Price(price),
            seller: seller.to_owned(),
        }
    }

    #[test]
    fn formats_offers_in_input_order() {
        let offers = [offer(44.9, "ShopA"), offer(39.0, "ShopB")];

        let expected = format!("{HEADER}» ShopA: Price: 44.9 Kč\n» ShopB: Price: 39.0 Kč\n");
        assert_eq!(format_message(Some(&offers)), expected);
    }

    #[test]
    fn unknown_price_renders_as_unbounded() {
        let offers = [offer(f64::INFINITY, "ShopA")];

        assert_eq!(
            format_message(Some(&offers)),
            format!("{HEADER}» ShopA: Price: inf Kč\n"),
        );
    }

    #[test]
    fn empty_list_falls_back_to_no_offers_message() {
        assert_eq!(format_message(Some(&[])), format!("{HEADER}{NO_OFFERS}"));
    }

    #[test]
    fn absent_offers_fall_back_to_no_offers_message() {
        assert_eq!(format_message(None), format!("{HEADER}{NO_OFFERS}"));
    }
}
