//! Google Gemini API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::config::GeminiConfig;
use crate::core::error::{AppError, Result};

/// Text-generation abstraction over the external service.
///
/// The report service depends on this trait so tests can inject a stub
/// implementation instead of the real API.
#[async_trait]
pub trait GenerateText: Send + Sync {
    /// Issue a single generation call for the given prompt. No retries.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        // Bounded timeout so a hung generation call cannot block a request
        // indefinitely.
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl GenerateText for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "GEMINI_API_KEY is not configured; set it in the environment.".to_string(),
            )
        })?;

        // Gemini API URL format: base_url/models/{model}:generateContent
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let req_body = GeminiRequest {
            contents: vec![GeminiMessage {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        // Gemini uses the API key as a query parameter
        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&req_body)
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Generation(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let gemini_resp: GeminiResponse = response.json().await.map_err(|e| {
            AppError::Generation(format!("Failed to parse Gemini response: {}", e))
        })?;

        extract_text(&gemini_resp).ok_or_else(|| {
            AppError::EmptyResponse("Gemini returned no content; try again later.".to_string())
        })
    }
}

/// Join the text parts of the first candidate, if any.
fn extract_text(response: &GeminiResponse) -> Option<String> {
    let candidate = response.candidates.as_ref()?.first()?;
    let text = candidate
        .content
        .as_ref()?
        .parts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

// Gemini API wire types
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiMessage>,
}

#[derive(Debug, Serialize)]
struct GeminiMessage {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(api_key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            api_key: api_key.map(str::to_string),
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_is_configuration_error() {
        let client = GeminiClient::new(test_config(None)).unwrap();
        let result = client.generate("prompt").await;
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_extract_text_from_candidate() {
        let resp: GeminiResponse = serde_json::from_str(
            r##"{"candidates":[{"content":{"parts":[{"text":"# Report"},{"text":"\n\nBullish."}],"role":"model"},"finishReason":"STOP"}]}"##,
        )
        .unwrap();
        assert_eq!(extract_text(&resp), Some("# Report\n\nBullish.".to_string()));
    }

    #[test]
    fn test_extract_text_empty_parts_is_none() {
        let resp: GeminiResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert_eq!(extract_text(&resp), None);

        let blank: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(&blank), None);
    }

    #[test]
    fn test_extract_text_no_candidates_is_none() {
        let resp: GeminiResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(extract_text(&resp), None);
    }
}
