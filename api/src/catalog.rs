use async_trait::async_trait;
use freebies_core::{FreebiesError, FreeGames, Result};

use crate::client::CatalogClient;
use crate::types::FreeGamesResponse;

const FIXTURE: &str = include_str!("../fixtures/free_games.json");

/// Anything that can produce the current / upcoming offer lists
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Raw feed, before free / upcoming classification
    async fn fetch(&self) -> Result<FreeGames>;
}

/// Bundled static catalog
#[derive(Debug, Default, Clone, Copy)]
pub struct StubCatalog;

impl StubCatalog {
    pub fn free_games() -> Result<FreeGames> {
        let response: FreeGamesResponse =
            serde_json::from_str(FIXTURE).map_err(|e| FreebiesError::Parse(e.to_string()))?;
        Ok(response.into())
    }
}

#[async_trait]
impl CatalogSource for StubCatalog {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn fetch(&self) -> Result<FreeGames> {
        Self::free_games()
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self) -> Result<FreeGames> {
        self.get_free_games().await
    }
}

/// Fetch from `source` and keep only offers that classify as free / upcoming
pub async fn load_free_games(source: &dyn CatalogSource) -> Result<FreeGames> {
    let games = source.fetch().await?.classified();
    tracing::info!(
        source = source.name(),
        current = games.current_games.len(),
        upcoming = games.next_games.len(),
        "catalog loaded"
    );
    Ok(games)
}
