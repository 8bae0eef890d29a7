use freebies_core::catalog::filter_by_title;
use freebies_core::models::Offer;
use freebies_core::resolver::{Collection, StoreLinks};
use freebies_core::FreeGames;

use crate::route::Route;

pub const CATALOG_ERROR: &str = "Failed to load game data. Please try again later.";
pub const SUMMARY_ERROR: &str = "Could not generate AI summary at this time.";

// ── Sub-states ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct SearchState {
    pub active: bool,
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryState {
    Loading,
    Ready(String),
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum DetailState {
    Idle,
    Resolving(String),
    Found {
        requested: String,
        offer: Box<Offer>,
        summary: SummaryState,
    },
    NotFound(String),
}

#[derive(Default)]
pub struct LoadingState {
    pub catalog: bool,
}

#[derive(Default)]
pub struct UiState {
    pub selected: usize,
    pub spinner_frame: usize,
    pub detail_scroll: u16,
}

// ── Model ───────────────────────────────────────────────────────────────────

pub struct Model {
    // Data
    pub games: FreeGames,
    pub catalog_loaded: bool,

    // Navigation
    pub route: Route,
    pub detail: DetailState,

    // UI
    pub ui: UiState,
    pub search: SearchState,

    // Loading
    pub loading: LoadingState,

    // Config
    pub store_links: StoreLinks,

    // Error
    pub error: Option<String>,

    // Control
    pub should_quit: bool,
}

impl Model {
    pub fn new(store_links: StoreLinks) -> Self {
        Self {
            games: FreeGames::default(),
            catalog_loaded: false,
            route: Route::Home,
            detail: DetailState::Idle,
            ui: UiState::default(),
            search: SearchState::default(),
            loading: LoadingState::default(),
            store_links,
            error: None,
            should_quit: false,
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading.catalog = loading;
        if loading {
            self.ui.spinner_frame = 0;
        }
    }

    // ── Query methods ───────────────────────────────────────────────────

    pub fn filtered(&self, collection: Collection) -> Vec<&Offer> {
        let offers = match collection {
            Collection::Current => &self.games.current_games,
            Collection::Upcoming => &self.games.next_games,
        };
        filter_by_title(offers, &self.search.term)
    }

    /// Every card on the list page, in display order
    pub fn visible_offers(&self) -> Vec<(Collection, &Offer)> {
        let current = self.filtered(Collection::Current);
        let upcoming = self.filtered(Collection::Upcoming);
        current
            .into_iter()
            .map(|offer| (Collection::Current, offer))
            .chain(upcoming.into_iter().map(|offer| (Collection::Upcoming, offer)))
            .collect()
    }

    pub fn selected_offer(&self) -> Option<&Offer> {
        self.visible_offers()
            .get(self.ui.selected)
            .map(|(_, offer)| *offer)
    }

    /// Search term set and nothing matches in either collection
    pub fn no_search_results(&self) -> bool {
        !self.search.term.is_empty()
            && self.filtered(Collection::Current).is_empty()
            && self.filtered(Collection::Upcoming).is_empty()
    }

    pub fn detail_offer(&self) -> Option<&Offer> {
        match &self.detail {
            DetailState::Found { offer, .. } => Some(offer.as_ref()),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.loading.catalog
            || matches!(self.detail, DetailState::Resolving(_))
            || matches!(
                self.detail,
                DetailState::Found {
                    summary: SummaryState::Loading,
                    ..
                }
            )
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        SPINNER_FRAMES[self.ui.spinner_frame]
    }

    /// Keep the selection inside the visible card list
    pub fn clamp_selection(&mut self) {
        let count = self.visible_offers().len();
        if count == 0 {
            self.ui.selected = 0;
        } else if self.ui.selected >= count {
            self.ui.selected = count - 1;
        }
    }
}
