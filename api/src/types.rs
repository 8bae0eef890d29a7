use serde::{Deserialize, Serialize};

use freebies_core::{FreeGames, Offer};

/// Catalog endpoint response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeGamesResponse {
    #[serde(default)]
    pub current_games: Vec<Offer>,
    #[serde(default)]
    pub next_games: Vec<Offer>,
}

impl From<FreeGamesResponse> for FreeGames {
    fn from(resp: FreeGamesResponse) -> Self {
        Self {
            current_games: resp.current_games,
            next_games: resp.next_games,
        }
    }
}

// Gemini generateContent request/response types
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case_config() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: "Hello".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: 0.4,
                max_output_tokens: 256,
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 256);
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "A cosy puzzle romp. "}, {"text": "Short and sweet."}]}},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 80}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.first_text().as_deref(),
            Some("A cosy puzzle romp. Short and sweet.")
        );
    }

    #[test]
    fn blocked_or_empty_response_has_no_text() {
        let blocked: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert_eq!(blocked.first_text(), None);

        let whitespace: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "  \n"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(whitespace.first_text(), None);
    }

    #[test]
    fn catalog_response_converts_into_free_games() {
        let json = r#"{"currentGames": [{"id": "a", "title": "A"}]}"#;
        let response: FreeGamesResponse = serde_json::from_str(json).unwrap();
        let games: FreeGames = response.into();
        assert_eq!(games.current_games.len(), 1);
        assert!(games.next_games.is_empty());
    }
}
