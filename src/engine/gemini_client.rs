use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;

const X_GOOG_API_KEY: &str = "x-goog-api-key";

/// User-supplied credential for the generation service. Lives in form
/// state and engine commands only; never persisted, never logged.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to the generation service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generation service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("the prompt was blocked by the service ({0})")]
    Blocked(String),
    #[error("the service returned an empty reply")]
    EmptyReply,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Blocking client for the Gemini `generateContent` endpoint.
/// One request per call; retry and deduplication are caller concerns.
pub struct GeminiClient {
    endpoint: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.api_base.trim_end_matches('/'),
                config.model
            ),
            client,
        })
    }

    pub fn generate(&self, api_key: &ApiKey, prompt: &str) -> Result<String, ServiceError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(X_GOOG_API_KEY, api_key.as_str())
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);

            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: GenerateContentResponse = response.json()?;

        let Some(candidate) = reply.candidates.into_iter().next() else {
            if let Some(reason) = reply.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(ServiceError::Blocked(reason));
            }
            return Err(ServiceError::EmptyReply);
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ServiceError::EmptyReply);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> AppConfig {
        AppConfig {
            model: "gemini-test".into(),
            api_base: base.to_string(),
            timeout_secs: 5,
        }
    }

    fn client(base: &str) -> GeminiClient {
        GeminiClient::new(&config(base)).unwrap()
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret");
        assert_eq!(format!("{key:?}"), "ApiKey([REDACTED])");
    }

    #[test]
    fn generate_returns_joined_candidate_text() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/models/gemini-test:generateContent")
            .match_header("x-goog-api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"Ad 1:\n"},{"text":"Headline: Hi\nDescription: There."}]}}]}"#,
            )
            .create();

        let reply = client(&server.url())
            .generate(&ApiKey::new("test-key"), "prompt")
            .unwrap();

        assert_eq!(reply, "Ad 1:\nHeadline: Hi\nDescription: There.");
    }

    #[test]
    fn generate_extracts_google_error_message() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/models/gemini-test:generateContent")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#)
            .create();

        let err = client(&server.url())
            .generate(&ApiKey::new("bad-key"), "prompt")
            .unwrap_err();

        match err {
            ServiceError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn generate_surfaces_block_reason() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/models/gemini-test:generateContent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[],"promptFeedback":{"blockReason":"SAFETY"}}"#)
            .create();

        let err = client(&server.url())
            .generate(&ApiKey::new("test-key"), "prompt")
            .unwrap_err();

        assert!(matches!(err, ServiceError::Blocked(reason) if reason == "SAFETY"));
    }

    #[test]
    fn generate_rejects_empty_reply() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/models/gemini-test:generateContent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
            .create();

        let err = client(&server.url())
            .generate(&ApiKey::new("test-key"), "prompt")
            .unwrap_err();

        assert!(matches!(err, ServiceError::EmptyReply));
    }
}
