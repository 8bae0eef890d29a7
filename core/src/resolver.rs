//! Presentation fields derived from a raw [`Offer`].
//!
//! Everything here is a pure function of the offer (and, for date labels,
//! of the caller-supplied "now"). Nothing is cached; views call these on
//! every render.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::models::{ImageKind, KeyImage, Offer};
use crate::relative::format_relative;

pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/400/225";
pub const GALLERY_LIMIT: usize = 8;
pub const DATE_UNAVAILABLE: &str = "Date info unavailable";

const THUMBNAIL_PREFERENCE: [ImageKind; 3] =
    [ImageKind::Wide, ImageKind::Thumbnail, ImageKind::Tall];
const BANNER_PREFERENCE: [ImageKind; 2] = [ImageKind::Wide, ImageKind::Thumbnail];
const GALLERY_EXCLUDED: [ImageKind; 4] = [
    ImageKind::Wide,
    ImageKind::Tall,
    ImageKind::Thumbnail,
    ImageKind::HeroVideo,
];

/// Which collection an offer is being presented in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Current,
    Upcoming,
}

impl Collection {
    pub fn title(&self) -> &str {
        match self {
            Collection::Current => "Currently Free",
            Collection::Upcoming => "Coming Soon",
        }
    }

    pub fn badge(&self) -> &str {
        match self {
            Collection::Current => "Free Now",
            Collection::Upcoming => "Coming Soon",
        }
    }
}

/// Ordered-fallback lookup: the first item whose kind matches the earliest
/// entry of `preference`, else the first item, else `None`.
pub fn first_preferred<'a, T, K: PartialEq>(
    items: &'a [T],
    preference: &[K],
    kind_of: impl Fn(&T) -> K,
) -> Option<&'a T> {
    preference
        .iter()
        .find_map(|wanted| items.iter().find(|item| kind_of(item) == *wanted))
        .or_else(|| items.first())
}

fn usable_slug(slug: Option<&str>) -> Option<&str> {
    slug.filter(|s| !s.is_empty() && !s.contains("undefined"))
}

/// Offer-mapping slug, then catalog-namespace slug, then the raw id
pub fn slug(offer: &Offer) -> String {
    usable_slug(offer.offer_mapping_slug())
        .or_else(|| usable_slug(offer.catalog_slug()))
        .unwrap_or(offer.id.as_str())
        .to_string()
}

/// Internal route for an offer's detail view
pub fn detail_path(offer: &Offer) -> String {
    format!("/game/{}", slug(offer))
}

pub fn thumbnail_url(offer: &Offer) -> &str {
    first_preferred(&offer.key_images, &THUMBNAIL_PREFERENCE, KeyImage::kind)
        .map(|image| image.url.as_str())
        .unwrap_or(PLACEHOLDER_IMAGE_URL)
}

pub fn banner_url(offer: &Offer) -> Option<&str> {
    first_preferred(&offer.key_images, &BANNER_PREFERENCE, KeyImage::kind)
        .map(|image| image.url.as_str())
}

/// Screenshot-like images, in feed order, at most [`GALLERY_LIMIT`]
pub fn gallery(offer: &Offer) -> Vec<&KeyImage> {
    offer
        .key_images
        .iter()
        .filter(|image| !GALLERY_EXCLUDED.contains(&image.kind()))
        .filter(|image| !image.image_type.to_lowercase().contains("avatar"))
        .take(GALLERY_LIMIT)
        .collect()
}

/// Category badges: the last segment of each category path
pub fn category_badges(offer: &Offer) -> Vec<&str> {
    offer.categories.iter().map(|c| c.leaf()).collect()
}

/// Builds canonical storefront URLs.
///
/// Add-ons and base games get separate path segments. The storefront
/// currently serves both under `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLinks {
    pub host: String,
    pub base_game_segment: String,
    pub add_on_segment: String,
}

impl Default for StoreLinks {
    fn default() -> Self {
        Self {
            host: "epicgames.com".to_string(),
            base_game_segment: "p".to_string(),
            add_on_segment: "p".to_string(),
        }
    }
}

impl StoreLinks {
    pub fn product_url(&self, offer: &Offer) -> String {
        let is_add_on = offer.is_add_on()
            || offer.categories.iter().any(|c| c.path.starts_with("add"));
        let segment = if is_add_on {
            &self.add_on_segment
        } else {
            &self.base_game_segment
        };
        format!("https://store.{}/en-US/{}/{}", self.host, segment, slug(offer))
    }
}

/// Human-readable promotion timing for a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLabel {
    Ends(String),
    Starts(String),
    Unavailable,
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateLabel::Ends(relative) => write!(f, "Ends {}", relative),
            DateLabel::Starts(relative) => write!(f, "Starts {}", relative),
            DateLabel::Unavailable => f.write_str(DATE_UNAVAILABLE),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn date_label(
    offer: &Offer,
    collection: Collection,
    now: DateTime<Utc>,
) -> Option<DateLabel> {
    match collection {
        Collection::Current => free_now_label(offer, now),
        Collection::Upcoming => upcoming_label(offer, now),
    }
}

pub fn free_now_label(offer: &Offer, now: DateTime<Utc>) -> Option<DateLabel> {
    let end = offer.current_interval()?.end_date.as_deref()?;
    Some(match parse_timestamp(end) {
        Some(end) => DateLabel::Ends(format_relative(end, now)),
        None => DateLabel::Unavailable,
    })
}

pub fn upcoming_label(offer: &Offer, now: DateTime<Utc>) -> Option<DateLabel> {
    let start = offer
        .upcoming_interval()
        .and_then(|interval| interval.start_date.as_deref());
    if let Some(start) = start.and_then(parse_timestamp) {
        return Some(DateLabel::Starts(format_relative(start, now)));
    }

    match offer.effective_date.as_deref().map(parse_timestamp) {
        Some(Some(effective)) => Some(DateLabel::Starts(format_relative(effective, now))),
        Some(None) => Some(DateLabel::Unavailable),
        None if start.is_some() => Some(DateLabel::Unavailable),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, OfferKind, PageMapping, PromotionGroup, PromotionalInterval, Promotions};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn image(image_type: &str, url: &str) -> KeyImage {
        KeyImage {
            image_type: image_type.to_string(),
            url: url.to_string(),
        }
    }

    fn mapping(slug: &str) -> PageMapping {
        PageMapping {
            page_slug: Some(slug.to_string()),
            page_type: Some("productHome".to_string()),
        }
    }

    fn offer_with_images(images: Vec<KeyImage>) -> Offer {
        Offer {
            id: "offer-id".to_string(),
            key_images: images,
            ..Offer::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 28, 15, 0, 0).unwrap()
    }

    fn interval(start: Option<&str>, end: Option<&str>) -> PromotionalInterval {
        PromotionalInterval {
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
            ..PromotionalInterval::default()
        }
    }

    fn with_current(interval: PromotionalInterval) -> Offer {
        Offer {
            promotions: Some(Promotions {
                promotional_offers: vec![PromotionGroup {
                    promotional_offers: vec![interval],
                }],
                upcoming_promotional_offers: vec![],
            }),
            ..Offer::default()
        }
    }

    fn with_upcoming(interval: PromotionalInterval, effective: Option<&str>) -> Offer {
        Offer {
            effective_date: effective.map(str::to_string),
            promotions: Some(Promotions {
                promotional_offers: vec![],
                upcoming_promotional_offers: vec![PromotionGroup {
                    promotional_offers: vec![interval],
                }],
            }),
            ..Offer::default()
        }
    }

    #[test]
    fn first_preferred_respects_preference_order_over_position() {
        let items = ["c", "b", "a"];
        let picked = first_preferred(&items, &["a", "b"], |s| *s);
        assert_eq!(picked, Some(&"a"));
    }

    #[test]
    fn first_preferred_falls_back_to_first_then_none() {
        let items = ["x", "y"];
        assert_eq!(first_preferred(&items, &["z"], |s| *s), Some(&"x"));
        let empty: [&str; 0] = [];
        assert_eq!(first_preferred(&empty, &["z"], |s| *s), None);
    }

    #[test]
    fn thumbnail_prefers_wide_banner() {
        let offer = offer_with_images(vec![
            image("OfferImageTall", "tall"),
            image("Thumbnail", "thumb"),
            image("OfferImageWide", "wide"),
        ]);
        assert_eq!(thumbnail_url(&offer), "wide");
    }

    #[test]
    fn thumbnail_falls_back_through_preference_then_first_image() {
        let tall_only = offer_with_images(vec![
            image("featuredMedia", "featured"),
            image("OfferImageTall", "tall"),
        ]);
        assert_eq!(thumbnail_url(&tall_only), "tall");

        let unknown = offer_with_images(vec![image("featuredMedia", "featured")]);
        assert_eq!(thumbnail_url(&unknown), "featured");
    }

    #[test]
    fn thumbnail_of_empty_image_set_is_placeholder() {
        let offer = offer_with_images(vec![]);
        assert_eq!(thumbnail_url(&offer), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn banner_is_optional() {
        let offer = offer_with_images(vec![]);
        assert_eq!(banner_url(&offer), None);

        let thumb = offer_with_images(vec![
            image("OfferImageTall", "tall"),
            image("Thumbnail", "thumb"),
        ]);
        assert_eq!(banner_url(&thumb), Some("thumb"));

        let other = offer_with_images(vec![image("featuredMedia", "featured")]);
        assert_eq!(banner_url(&other), Some("featured"));
    }

    #[test]
    fn slug_skips_undefined_offer_mapping() {
        let offer = Offer {
            id: "raw-id".to_string(),
            offer_mappings: vec![mapping("undefined-slug")],
            catalog_ns: crate::models::CatalogNs {
                mappings: vec![mapping("catalog-slug")],
            },
            ..Offer::default()
        };
        assert_eq!(slug(&offer), "catalog-slug");
    }

    #[test]
    fn slug_falls_back_to_id() {
        let offer = Offer {
            id: "raw-id".to_string(),
            offer_mappings: vec![mapping("x-undefined")],
            catalog_ns: crate::models::CatalogNs {
                mappings: vec![mapping("undefined")],
            },
            ..Offer::default()
        };
        assert_eq!(slug(&offer), "raw-id");
        assert_eq!(detail_path(&offer), "/game/raw-id");

        let bare = Offer {
            id: "bare".to_string(),
            ..Offer::default()
        };
        assert_eq!(slug(&bare), "bare");
    }

    #[test]
    fn slug_prefers_offer_mapping() {
        let offer = Offer {
            id: "raw-id".to_string(),
            offer_mappings: vec![mapping("offer-slug")],
            catalog_ns: crate::models::CatalogNs {
                mappings: vec![mapping("catalog-slug")],
            },
            ..Offer::default()
        };
        assert_eq!(slug(&offer), "offer-slug");
    }

    #[test]
    fn store_url_uses_resolved_slug_for_both_kinds() {
        let links = StoreLinks::default();
        let base = Offer {
            id: "id".to_string(),
            offer_type: OfferKind::BaseGame,
            offer_mappings: vec![mapping("chuchel-203808")],
            ..Offer::default()
        };
        let add_on = Offer {
            offer_type: OfferKind::AddOn,
            ..base.clone()
        };
        assert_eq!(
            links.product_url(&base),
            "https://store.epicgames.com/en-US/p/chuchel-203808"
        );
        assert_eq!(links.product_url(&add_on), links.product_url(&base));
    }

    #[test]
    fn store_url_add_on_segment_is_configurable() {
        let links = StoreLinks {
            add_on_segment: "addon".to_string(),
            ..StoreLinks::default()
        };
        let by_category = Offer {
            id: "gift".to_string(),
            categories: vec![Category {
                path: "addons/durable".to_string(),
            }],
            ..Offer::default()
        };
        assert_eq!(
            links.product_url(&by_category),
            "https://store.epicgames.com/en-US/addon/gift"
        );
    }

    #[test]
    fn gallery_excludes_banners_and_avatars() {
        let offer = offer_with_images(vec![
            image("OfferImageWide", "wide"),
            image("Screenshot", "s1"),
            image("heroCarouselVideo", "video"),
            image("ProductLogo", "logo"),
            image("Thumbnail", "thumb"),
            image("PlayerAvatar", "avatar"),
            image("OfferImageTall", "tall"),
            image("featuredMedia", "featured"),
        ]);
        let urls: Vec<&str> = gallery(&offer).iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, vec!["s1", "logo", "featured"]);
    }

    #[test]
    fn gallery_caps_at_eight_preserving_order() {
        let images = (0..12)
            .map(|i| image("Screenshot", &format!("shot-{}", i)))
            .collect();
        let offer = offer_with_images(images);
        let urls: Vec<String> = gallery(&offer).iter().map(|i| i.url.clone()).collect();
        let expected: Vec<String> = (0..8).map(|i| format!("shot-{}", i)).collect();
        assert_eq!(urls, expected);
    }

    #[test]
    fn free_now_label_counts_down_to_end() {
        let offer = with_current(interval(
            Some("2025-04-24T15:00:00.000Z"),
            Some("2025-05-01T15:00:00.000Z"),
        ));
        let label = date_label(&offer, Collection::Current, now()).unwrap();
        assert_eq!(label, DateLabel::Ends("in 3 days".to_string()));
        assert_eq!(label.to_string(), "Ends in 3 days");
    }

    #[test]
    fn free_now_label_without_promotion_is_none() {
        assert_eq!(free_now_label(&Offer::default(), now()), None);
    }

    #[test]
    fn unparseable_end_is_unavailable() {
        let offer = with_current(interval(None, Some("next thursday")));
        let label = free_now_label(&offer, now()).unwrap();
        assert_eq!(label.to_string(), DATE_UNAVAILABLE);
    }

    #[test]
    fn upcoming_label_uses_interval_start() {
        let offer = with_upcoming(
            interval(Some("2025-05-01T15:00:00.000Z"), None),
            Some("2025-01-23T18:00:00.000Z"),
        );
        let label = upcoming_label(&offer, now()).unwrap();
        assert_eq!(label.to_string(), "Starts in 3 days");
    }

    #[test]
    fn upcoming_label_falls_back_to_effective_date() {
        let offer = with_upcoming(interval(None, None), Some("2025-04-28T13:00:00Z"));
        let label = upcoming_label(&offer, now()).unwrap();
        assert_eq!(label.to_string(), "Starts 2 hours ago");

        let bad_start = with_upcoming(
            interval(Some("garbage"), None),
            Some("2025-04-28T13:00:00Z"),
        );
        assert_eq!(
            upcoming_label(&bad_start, now()).unwrap().to_string(),
            "Starts 2 hours ago"
        );
    }

    #[test]
    fn upcoming_label_unparseable_everywhere_is_unavailable() {
        let bad_effective = with_upcoming(interval(None, None), Some("soon"));
        assert_eq!(upcoming_label(&bad_effective, now()), Some(DateLabel::Unavailable));

        let bad_start = with_upcoming(interval(Some("soon"), None), None);
        assert_eq!(upcoming_label(&bad_start, now()), Some(DateLabel::Unavailable));
    }

    #[test]
    fn upcoming_label_without_dates_is_none() {
        assert_eq!(upcoming_label(&Offer::default(), now()), None);
    }
}
