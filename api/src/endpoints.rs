use freebies_core::{FreebiesError, FreeGames, Result};

use crate::{client::CatalogClient, types::FreeGamesResponse};

impl CatalogClient {
    /// Fetch the raw (unclassified) free games feed
    pub async fn get_free_games(&self) -> Result<FreeGames> {
        let mut request = self.client().get(self.endpoint());

        if let Some(key) = self.rapidapi_key() {
            request = request.header("X-RapidAPI-Key", key);
        }
        if let Some(host) = self.rapidapi_host() {
            request = request.header("X-RapidAPI-Host", host);
        }

        tracing::debug!(endpoint = self.endpoint(), "fetching free games");

        let response = request
            .send()
            .await
            .map_err(|e| FreebiesError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "catalog endpoint returned an error");
            return Err(FreebiesError::Api(format!(
                "Catalog returned status {}: {}",
                status, body
            )));
        }

        let games: FreeGamesResponse = response
            .json()
            .await
            .map_err(|e| FreebiesError::Parse(e.to_string()))?;

        Ok(games.into())
    }
}
