use crate::message::Message;
use crate::model::{DetailState, Model, SummaryState, CATALOG_ERROR, SUMMARY_ERROR};
use crate::route::Route;

/// Side effects the main loop must start after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    LoadCatalog,
    ResolveGame(String),
    Summarize { slug: String, description: String },
}

pub struct UpdateResult {
    pub msg: Option<Message>,
    pub command: Command,
}

impl UpdateResult {
    fn none() -> Self {
        Self {
            msg: None,
            command: Command::None,
        }
    }

    fn with_reload() -> Self {
        Self {
            msg: None,
            command: Command::LoadCatalog,
        }
    }

    fn with_msg(msg: Message) -> Self {
        Self {
            msg: Some(msg),
            command: Command::None,
        }
    }

    fn with_command(command: Command) -> Self {
        Self { msg: None, command }
    }
}

pub fn update(model: &mut Model, msg: Message) -> UpdateResult {
    match msg {
        // ── Navigation ──────────────────────────────────────────────────
        Message::SelectNext => {
            let count = model.visible_offers().len();
            if count > 0 {
                model.ui.selected = if model.ui.selected >= count - 1 {
                    0
                } else {
                    model.ui.selected + 1
                };
            }
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            let count = model.visible_offers().len();
            if count > 0 {
                model.ui.selected = if model.ui.selected == 0 {
                    count - 1
                } else {
                    model.ui.selected - 1
                };
            }
            UpdateResult::none()
        }
        Message::OpenSelected => match model.selected_offer() {
            Some(offer) => {
                let slug = freebies_core::resolver::slug(offer);
                UpdateResult::with_msg(Message::Navigate(Route::game(slug)))
            }
            None => UpdateResult::none(),
        },
        Message::Navigate(route) => navigate(model, route),
        Message::Back => {
            if model.route == Route::Home {
                UpdateResult::none()
            } else {
                UpdateResult::with_msg(Message::Navigate(Route::Home))
            }
        }
        Message::OpenInStore => {
            if let Some(offer) = model.detail_offer() {
                let url = model.store_links.product_url(offer);
                if let Err(e) = webbrowser::open(&url) {
                    tracing::warn!(%url, error = %e, "could not open browser");
                }
            }
            UpdateResult::none()
        }
        Message::ScrollDown => {
            model.ui.detail_scroll = model.ui.detail_scroll.saturating_add(1);
            UpdateResult::none()
        }
        Message::ScrollUp => {
            model.ui.detail_scroll = model.ui.detail_scroll.saturating_sub(1);
            UpdateResult::none()
        }

        // ── Search ──────────────────────────────────────────────────────
        Message::StartSearch => {
            model.search.active = true;
            UpdateResult::none()
        }
        Message::ConfirmSearch => {
            model.search.active = false;
            UpdateResult::none()
        }
        Message::CancelSearch => {
            model.search.active = false;
            model.search.term.clear();
            model.ui.selected = 0;
            UpdateResult::none()
        }
        Message::SearchPush(c) => {
            model.search.term.push(c);
            model.ui.selected = 0;
            UpdateResult::none()
        }
        Message::SearchPop => {
            model.search.term.pop();
            model.ui.selected = 0;
            UpdateResult::none()
        }
        Message::ClearSearch => {
            if !model.search.term.is_empty() {
                model.search.term.clear();
                model.ui.selected = 0;
            }
            UpdateResult::none()
        }

        // ── Data loading results ────────────────────────────────────────
        Message::RequestRefresh => match model.route.clone() {
            Route::Game(slug) => UpdateResult::with_msg(Message::Navigate(Route::game(slug))),
            _ => UpdateResult::with_reload(),
        },
        Message::CatalogLoaded(games) => {
            model.games = games;
            model.catalog_loaded = true;
            model.loading.catalog = false;
            model.error = None;
            model.clamp_selection();
            UpdateResult::none()
        }
        Message::CatalogLoadFailed(error) => {
            tracing::warn!(%error, "catalog load failed");
            model.games = Default::default();
            model.catalog_loaded = true;
            model.loading.catalog = false;
            model.error = Some(CATALOG_ERROR.to_string());
            model.ui.selected = 0;
            UpdateResult::none()
        }
        Message::GameResolved { slug, offer } => {
            if !is_current_game(model, &slug) {
                return UpdateResult::none();
            }
            match offer {
                Some(offer) => {
                    let description = offer.description.clone();
                    model.detail = DetailState::Found {
                        requested: slug.clone(),
                        offer,
                        summary: SummaryState::Loading,
                    };
                    UpdateResult::with_command(Command::Summarize { slug, description })
                }
                None => {
                    tracing::info!(%slug, "no game matches slug");
                    model.detail = DetailState::NotFound(slug);
                    UpdateResult::none()
                }
            }
        }
        Message::SummaryLoaded { slug, result } => {
            if let DetailState::Found {
                requested, summary, ..
            } = &mut model.detail
            {
                if *requested == slug {
                    *summary = match result {
                        Ok(text) => SummaryState::Ready(text),
                        Err(error) => {
                            tracing::warn!(%slug, %error, "AI summary failed");
                            SummaryState::Failed(SUMMARY_ERROR.to_string())
                        }
                    };
                }
            }
            UpdateResult::none()
        }

        // ── System ──────────────────────────────────────────────────────
        Message::Tick => {
            if model.is_busy() {
                model.ui.spinner_frame = (model.ui.spinner_frame + 1) % 10;
            }
            UpdateResult::none()
        }

        Message::Quit => {
            model.should_quit = true;
            UpdateResult::none()
        }
    }
}

fn navigate(model: &mut Model, route: Route) -> UpdateResult {
    tracing::debug!(route = %route, "navigate");
    model.route = route.clone();
    model.ui.detail_scroll = 0;

    match route {
        Route::Home => {
            model.detail = DetailState::Idle;
            model.search.active = false;
            if !model.catalog_loaded && !model.loading.catalog {
                UpdateResult::with_reload()
            } else {
                UpdateResult::none()
            }
        }
        Route::Game(slug) => {
            model.detail = DetailState::Resolving(slug.clone());
            UpdateResult::with_command(Command::ResolveGame(slug))
        }
        Route::NotFound(path) => {
            model.detail = DetailState::NotFound(path);
            UpdateResult::none()
        }
    }
}

fn is_current_game(model: &Model, slug: &str) -> bool {
    matches!(&model.route, Route::Game(current) if current == slug)
}
