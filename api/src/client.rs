use reqwest::Client;

/// HTTP client for a remote free-games catalog endpoint.
///
/// The endpoint is expected to return `{ currentGames, nextGames }`. RapidAPI
/// key/host headers are sent when configured.
pub struct CatalogClient {
    client: Client,
    endpoint: String,
    rapidapi_key: Option<String>,
    rapidapi_host: Option<String>,
}

impl CatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            rapidapi_key: None,
            rapidapi_host: None,
        }
    }

    pub fn with_rapidapi(mut self, key: Option<String>, host: Option<String>) -> Self {
        self.rapidapi_key = key;
        self.rapidapi_host = host;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn rapidapi_key(&self) -> Option<&str> {
        self.rapidapi_key.as_deref()
    }

    pub fn rapidapi_host(&self) -> Option<&str> {
        self.rapidapi_host.as_deref()
    }
}
