//! Gemini provider: one `generateContent` call per image.
//!
//! The image goes inline as base64 next to the instruction text. The API key
//! travels as the `key` query parameter and is never logged.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use grapewatch_core::config::InferenceConfig;
use grapewatch_core::{IInferenceProvider, InferenceError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::mime::sniff_mime_type;

/// Longest error body kept in `InferenceError::Status`.
const MAX_ERROR_BODY: usize = 512;

// ── Request ──

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text {
        text: &'a str,
    },
    #[serde(rename_all = "camelCase")]
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: &'static str,
    data: String,
}

// ── Response ──

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PromptFeedback {
    block_reason: Option<String>,
}

fn build_request<'a>(image: &[u8], instruction: &'a str) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                RequestPart::Text { text: instruction },
                RequestPart::InlineData {
                    inline_data: InlineData {
                        mime_type: sniff_mime_type(image),
                        data: STANDARD.encode(image),
                    },
                },
            ],
        }],
    }
}

/// Concatenate the text parts of the first candidate.
fn response_text(response: GenerateContentResponse) -> Result<String, InferenceError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(InferenceError::Blocked { reason });
    }
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if text.is_empty() {
        return Err(InferenceError::EmptyResponse);
    }
    Ok(text)
}

fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY).collect()
}

/// Blocking client for the Generative Language API.
pub struct GeminiProvider {
    client: reqwest::blocking::Client,
    url: String,
    api_key: String,
}

impl GeminiProvider {
    /// Build a provider from config. Fails when no credential resolves.
    pub fn from_config(config: &InferenceConfig) -> Result<Self, InferenceError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| InferenceError::MissingCredential {
                env_var: config.api_key_env.clone(),
            })?;
        Self::new(config, api_key)
    }

    /// Build a provider with an already-resolved credential.
    pub fn new(config: &InferenceConfig, api_key: impl Into<String>) -> Result<Self, InferenceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| InferenceError::Transport {
                message: e.to_string(),
            })?;
        let url = format!(
            "{}/models/{}:generateContent",
            config.endpoint.trim_end_matches('/'),
            config.model
        );
        Ok(Self {
            client,
            url,
            api_key: api_key.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl IInferenceProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn analyze_image(&self, image: &[u8], instruction: &str) -> Result<String, InferenceError> {
        let request = build_request(image, instruction);
        debug!(url = %self.url, image_bytes = image.len(), "Sending generateContent request");

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .map_err(|e| InferenceError::Transport {
                message: e.without_url().to_string(),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| InferenceError::Transport {
            message: e.without_url().to_string(),
        })?;
        if !status.is_success() {
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        response_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3];
        let request = build_request(&jpeg, "describe");
        let json = serde_json::to_value(&request).unwrap();
        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "describe");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[1]["inlineData"]["data"], STANDARD.encode(jpeg));
    }

    #[test]
    fn test_response_text_joins_parts() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]},"finishReason":"STOP"}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response_text(parsed).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(response_text(parsed), Err(InferenceError::EmptyResponse)));
    }

    #[test]
    fn test_blocked_prompt() {
        let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        match response_text(parsed) {
            Err(InferenceError::Blocked { reason }) => assert_eq!(reason, "SAFETY"),
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_credential() {
        let config = InferenceConfig {
            api_key: None,
            api_key_env: "GRAPEWATCH_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            GeminiProvider::from_config(&config),
            Err(InferenceError::MissingCredential { .. })
        ));
    }

    #[test]
    fn test_url_uses_model() {
        let config = InferenceConfig {
            endpoint: "https://example.test/v1beta/".to_string(),
            model: "gemini-test".to_string(),
            ..Default::default()
        };
        let provider = GeminiProvider::new(&config, "k").unwrap();
        assert_eq!(provider.url(), "https://example.test/v1beta/models/gemini-test:generateContent");
    }

    #[test]
    fn test_truncate_body() {
        let long = "x".repeat(MAX_ERROR_BODY * 2);
        assert_eq!(truncate_body(&long).len(), MAX_ERROR_BODY);
    }
}
