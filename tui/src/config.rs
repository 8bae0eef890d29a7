use freebies_api::summary::DEFAULT_MODEL;
use freebies_core::resolver::StoreLinks;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persistent configuration saved to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Free-games feed URL. Unset means the bundled catalog is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rapidapi_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rapidapi_host: Option<String>,
    #[serde(default = "default_store_host")]
    pub store_host: String,
    /// Path segment for base game store pages
    #[serde(default = "default_segment")]
    pub base_game_segment: String,
    /// Path segment for add-on store pages
    #[serde(default = "default_segment")]
    pub add_on_segment: String,
    #[serde(default = "default_summary_model")]
    pub summary_model: String,
    /// Gemini API key (can also be set via GOOGLE_GENAI_API_KEY or GEMINI_API_KEY)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_api_key: Option<String>,
}

fn default_store_host() -> String {
    StoreLinks::default().host
}

fn default_segment() -> String {
    "p".to_string()
}

fn default_summary_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_endpoint: None,
            rapidapi_key: None,
            rapidapi_host: None,
            store_host: default_store_host(),
            base_game_segment: default_segment(),
            add_on_segment: default_segment(),
            summary_model: default_summary_model(),
            summary_api_key: None,
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/freebies/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("freebies").join("config.json"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read config");
                Self::default()
            }
        }
    }

    fn parse(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid config, using defaults");
            Self::default()
        })
    }

    /// Load from disk, then let environment variables win
    pub fn load_with_env() -> Self {
        let mut config = Self::load();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| var(key).filter(|v| !v.is_empty());

        if let Some(url) = get("FREEBIES_CATALOG_URL") {
            self.catalog_endpoint = Some(url);
        }
        if let Some(key) = get("RAPIDAPI_KEY") {
            self.rapidapi_key = Some(key);
        }
        if let Some(host) = get("RAPIDAPI_HOST") {
            self.rapidapi_host = Some(host);
        }
        // Priority: GOOGLE_GENAI_API_KEY, then GEMINI_API_KEY, then config file
        if let Some(key) = get("GOOGLE_GENAI_API_KEY").or_else(|| get("GEMINI_API_KEY")) {
            self.summary_api_key = Some(key);
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn store_links(&self) -> StoreLinks {
        StoreLinks {
            host: self.store_host.clone(),
            base_game_segment: self.base_game_segment.clone(),
            add_on_segment: self.add_on_segment.clone(),
        }
    }

    pub fn summary_api_key(&self) -> Option<String> {
        self.summary_api_key.clone().filter(|k| !k.is_empty())
    }
}
