use serde::{Deserialize, Serialize};

use crate::classify::{is_current, is_upcoming};
use crate::models::Offer;

/// Current and upcoming free offers, as returned by a catalog source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FreeGames {
    pub current_games: Vec<Offer>,
    pub next_games: Vec<Offer>,
}

impl FreeGames {
    /// Keep only offers that pass the free / upcoming-free rules
    pub fn classified(mut self) -> Self {
        self.current_games.retain(is_current);
        self.next_games.retain(is_upcoming);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.current_games.is_empty() && self.next_games.is_empty()
    }

    /// All offers, current first
    pub fn all(&self) -> impl Iterator<Item = &Offer> {
        self.current_games.iter().chain(self.next_games.iter())
    }

    /// First offer whose offer-mapping slug, catalog slug or id equals `slug`
    pub fn find_by_slug(&self, slug: &str) -> Option<&Offer> {
        self.all().find(|offer| matches_slug(offer, slug))
    }
}

pub fn matches_slug(offer: &Offer, slug: &str) -> bool {
    offer.offer_mapping_slug() == Some(slug)
        || offer.catalog_slug() == Some(slug)
        || offer.id == slug
}

/// Case-insensitive title filter; an empty term keeps everything
pub fn filter_by_title<'a>(offers: &'a [Offer], term: &str) -> Vec<&'a Offer> {
    if term.is_empty() {
        return offers.iter().collect();
    }
    let needle = term.to_lowercase();
    offers
        .iter()
        .filter(|offer| offer.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogNs, OfferKind, PageMapping};

    fn offer(id: &str, title: &str, offer_slug: Option<&str>, catalog_slug: Option<&str>) -> Offer {
        let mapping = |slug: Option<&str>| -> Vec<PageMapping> {
            slug.map(|s| PageMapping {
                page_slug: Some(s.to_string()),
                page_type: None,
            })
            .into_iter()
            .collect()
        };
        Offer {
            id: id.to_string(),
            title: title.to_string(),
            offer_type: OfferKind::BaseGame,
            offer_mappings: mapping(offer_slug),
            catalog_ns: CatalogNs {
                mappings: mapping(catalog_slug),
            },
            ..Offer::default()
        }
    }

    fn catalog() -> FreeGames {
        FreeGames {
            current_games: vec![
                offer("id-1", "CHUCHEL", Some("chuchel-203808"), Some("chuchel-203808")),
                offer("id-2", "Albion Online Free Welcome Gift", Some("albion-bundle"), Some("albion-online")),
            ],
            next_games: vec![offer("id-3", "Super Space Club", None, None)],
        }
    }

    #[test]
    fn find_by_slug_checks_offer_catalog_and_id() {
        let games = catalog();
        assert_eq!(games.find_by_slug("chuchel-203808").unwrap().id, "id-1");
        assert_eq!(games.find_by_slug("albion-online").unwrap().id, "id-2");
        assert_eq!(games.find_by_slug("id-3").unwrap().title, "Super Space Club");
        assert!(games.find_by_slug("unknown-slug").is_none());
    }

    #[test]
    fn find_by_slug_returns_first_match_across_collections() {
        let mut games = catalog();
        games.next_games.push(offer("id-4", "Duplicate", Some("chuchel-203808"), None));
        assert_eq!(games.find_by_slug("chuchel-203808").unwrap().id, "id-1");
    }

    #[test]
    fn title_filter_is_case_insensitive_substring() {
        let games = catalog();
        let hits = filter_by_title(&games.current_games, "cHuChEl");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "CHUCHEL");
        assert!(filter_by_title(&games.next_games, "chuchel").is_empty());
    }

    #[test]
    fn empty_term_keeps_input_order() {
        let games = catalog();
        let titles: Vec<&str> = filter_by_title(&games.current_games, "")
            .iter()
            .map(|o| o.title.as_str())
            .collect();
        assert_eq!(titles, vec!["CHUCHEL", "Albion Online Free Welcome Gift"]);
    }

    #[test]
    fn classified_drops_offers_that_are_not_free() {
        let mut priced = offer("id-5", "Priced", None, None);
        priced.price.total_price.discount_price = 1999;
        let mut games = catalog();
        games.current_games.push(priced);

        let games = games.classified();
        assert_eq!(games.current_games.len(), 2);
        // no upcoming promotion data on the plain fixture offer
        assert!(games.next_games.is_empty());
    }
}
