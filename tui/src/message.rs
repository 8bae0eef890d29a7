use freebies_core::models::Offer;
use freebies_core::FreeGames;

use crate::route::Route;

pub enum Message {
    // Navigation
    SelectNext,
    SelectPrevious,
    OpenSelected,
    Navigate(Route),
    Back,
    OpenInStore,
    ScrollDown,
    ScrollUp,

    // Search
    StartSearch,
    ConfirmSearch,
    CancelSearch,
    SearchPush(char),
    SearchPop,
    ClearSearch,

    // Data loading results
    RequestRefresh,
    CatalogLoaded(FreeGames),
    CatalogLoadFailed(String),
    GameResolved {
        slug: String,
        offer: Option<Box<Offer>>,
    },
    SummaryLoaded {
        slug: String,
        result: Result<String, String>,
    },

    // System
    Tick,
    Quit,
}
