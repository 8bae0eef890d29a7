//! AI game summaries.
//!
//! A [`Summarizer`] turns a store description into a short synopsis. The
//! only provider is Google's Gemini `generateContent` API; there are no
//! retries, no caching and no streaming.

use async_trait::async_trait;
use reqwest::Client;

use freebies_core::{FreebiesError, Result};

use crate::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const PROMPT_TEMPLATE: &str = "You are an expert game reviewer. Please provide a concise, engaging, one-paragraph summary (maximum 3 sentences) of the following game description. Focus on the core gameplay loop and unique selling points.

Game Description:
{description}

Summary:";

/// Fill the reviewer prompt with a game description
pub fn build_prompt(description: &str) -> String {
    PROMPT_TEMPLATE.replace("{description}", description)
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    fn name(&self) -> &'static str;

    /// At most three sentences, one paragraph
    async fn summarize(&self, description: &str) -> Result<String>;
}

pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", API_BASE_URL, self.model)
    }
}

#[async_trait]
impl Summarizer for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn summarize(&self, description: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            FreebiesError::Config("Gemini API key is required".to_string())
        })?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: build_prompt(description),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: 0.7,
                max_output_tokens: 256,
            }),
        };

        tracing::debug!(model = %self.model, "requesting summary");

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| FreebiesError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, model = %self.model, "summary request rejected");
            return Err(FreebiesError::Api(format!(
                "Gemini returned status {}: {}",
                status, body
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| FreebiesError::Parse(e.to_string()))?;

        body.first_text()
            .ok_or_else(|| FreebiesError::Generation("model returned no text".to_string()))
    }
}
