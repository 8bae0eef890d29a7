//! Free / upcoming-free classification.
//!
//! These rules are a heuristic over the feed, not a guarantee that an offer
//! is really free. They are applied once when a catalog is loaded.

use crate::models::Offer;

/// Free right now: zero discounted price, or an add-on.
///
/// Add-ons are kept even with a nonzero bundled price since they ride on a
/// free base game.
pub fn is_current(offer: &Offer) -> bool {
    offer.price.total_price.discount_price == 0 || offer.is_add_on()
}

/// Expected to become free: the next promotion is a 100% discount, or the
/// base price is already zero and some promotion is scheduled.
pub fn is_upcoming(offer: &Offer) -> bool {
    let full_discount = offer
        .upcoming_interval()
        .and_then(|interval| interval.discount_setting.discount_percentage)
        == Some(100);

    full_discount
        || (offer.price.total_price.original_price == 0 && offer.has_upcoming_promotions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DiscountSetting, OfferKind, PromotionGroup, PromotionalInterval, Promotions,
    };

    fn priced(kind: OfferKind, original: i64, discounted: i64) -> Offer {
        let mut offer = Offer {
            offer_type: kind,
            ..Offer::default()
        };
        offer.price.total_price.original_price = original;
        offer.price.total_price.discount_price = discounted;
        offer
    }

    fn upcoming(percentage: Option<u32>) -> Promotions {
        Promotions {
            promotional_offers: vec![],
            upcoming_promotional_offers: vec![PromotionGroup {
                promotional_offers: vec![PromotionalInterval {
                    start_date: Some("2025-05-01T15:00:00.000Z".to_string()),
                    end_date: Some("2025-05-08T15:00:00.000Z".to_string()),
                    discount_setting: DiscountSetting {
                        discount_type: "PERCENTAGE".to_string(),
                        discount_percentage: percentage,
                    },
                }],
            }],
        }
    }

    #[test]
    fn zero_priced_base_game_is_current() {
        assert!(is_current(&priced(OfferKind::BaseGame, 999, 0)));
    }

    #[test]
    fn priced_add_on_is_still_current() {
        assert!(is_current(&priced(OfferKind::AddOn, 1499, 1499)));
    }

    #[test]
    fn priced_base_game_is_not_current() {
        assert!(!is_current(&priced(OfferKind::BaseGame, 1499, 1499)));
    }

    #[test]
    fn full_discount_is_upcoming_regardless_of_price() {
        let mut offer = priced(OfferKind::BaseGame, 1499, 1499);
        offer.promotions = Some(upcoming(Some(100)));
        assert!(is_upcoming(&offer));
    }

    #[test]
    fn partial_discount_on_priced_game_is_not_upcoming() {
        let mut offer = priced(OfferKind::BaseGame, 1499, 1499);
        offer.promotions = Some(upcoming(Some(50)));
        assert!(!is_upcoming(&offer));
    }

    #[test]
    fn free_base_price_with_scheduled_promotion_is_upcoming() {
        let mut offer = priced(OfferKind::BaseGame, 0, 0);
        offer.promotions = Some(upcoming(None));
        assert!(is_upcoming(&offer));
    }

    #[test]
    fn free_base_price_without_promotion_is_not_upcoming() {
        assert!(!is_upcoming(&priced(OfferKind::BaseGame, 0, 0)));
    }
}
