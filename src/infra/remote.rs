//! Blocking client for the remote generative endpoint.
//!
//! Speaks the `models/{model}:generateContent` REST protocol with the API
//! key passed as a query parameter. One request per feedback attempt; the
//! client enforces a hard timeout so a hung call still resolves to the
//! orchestrator's fallback path.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::feedback::{RemoteError, TextGenerator};
use crate::infra::config::RemoteConfig;

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ReplyContent>,
}

#[derive(Debug, Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Joined text of the first candidate, trimmed. `None` when the
    /// response is well-formed JSON but carries no usable completion.
    fn completion_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let parts = candidate.content?.parts;

        let text: String = parts.into_iter().map(|p| p.text).collect();
        let text = text.trim().to_string();

        if text.is_empty() { None } else { Some(text) }
    }
}

/// Client for one configured model behind one endpoint.
pub struct GeminiClient {
    http: Client,
    url: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client with the configured request timeout.
    pub fn new(cfg: &RemoteConfig, api_key: String) -> Result<Self, RemoteError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            cfg.endpoint.trim_end_matches('/'),
            cfg.model
        );

        Ok(Self { http, url, api_key })
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, RemoteError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(url = %self.url, "calling remote generative endpoint");

        let response = self
            .http
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let body: GenerateResponse = response.json()?;

        body.completion_text().ok_or(RemoteError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_text_joins_first_candidate_parts() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "Line one."}, {"text": "\nLine two."}]}},
                    {"content": {"parts": [{"text": "ignored second candidate"}]}}
                ]
            }"#,
        )
        .expect("sample response parses");

        assert_eq!(
            body.completion_text().as_deref(),
            Some("Line one.\nLine two.")
        );
    }

    #[test]
    fn test_empty_candidates_yield_none() {
        let body: GenerateResponse =
            serde_json::from_str(r#"{"candidates": []}"#).expect("parses");

        assert!(body.completion_text().is_none());
    }

    #[test]
    fn test_whitespace_only_completion_yields_none() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "  \n "}]}}]}"#,
        )
        .expect("parses");

        assert!(body.completion_text().is_none());
    }

    #[test]
    fn test_missing_fields_tolerated() {
        // A candidate with no content block is malformed but must not panic
        let body: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{}]}"#).expect("parses");

        assert!(body.completion_text().is_none());
    }
}
