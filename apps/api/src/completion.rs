//! Completion Client — the single point of entry for all LLM calls in Postsmith.
//!
//! ARCHITECTURAL RULE: No other module may call the completion API directly.
//! All LLM interactions MUST go through this module.
//!
//! Model: gpt-4o-mini (hardcoded — do not make configurable to prevent drift)

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The model used for all completion calls in Postsmith.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion returned empty content")]
    EmptyContent,

    #[error("malformed structured response: {detail}")]
    MalformedResponse { detail: String },
}

/// One request to the completion service.
///
/// `json_mode` asks the service for a single JSON object via
/// `response_format`; structured calls leave `temperature` unset and
/// free-text calls set it.
#[derive(Debug, Clone)]
pub struct CompletionCall {
    pub system: String,
    pub user: String,
    pub temperature: Option<f32>,
    pub json_mode: bool,
}

/// Backend seam for the completion service. Carried in `AppState` as a
/// trait object so handler tests can swap in a stub.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Sends exactly one request and returns the reply text.
    /// No retry, no backoff; a failure surfaces immediately.
    async fn complete(&self, call: &CompletionCall) -> Result<String, CompletionError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (OpenAI chat completions)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// OpenAI client
// ────────────────────────────────────────────────────────────────────────────

/// Client for an OpenAI-compatible `chat/completions` endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiClient {
    async fn complete(&self, call: &CompletionCall) -> Result<String, CompletionError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &call.system,
                },
                ChatMessage {
                    role: "user",
                    content: &call.user,
                },
            ],
            temperature: call.temperature,
            response_format: call.json_mode.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's own message when the error body parses
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(CompletionError::EmptyContent)?;

        debug!("completion call succeeded ({} chars)", content.len());

        Ok(content)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Structured-output helpers
// ────────────────────────────────────────────────────────────────────────────

/// Deserializes a structured reply into `T`, stripping code fences
/// first. A reply that does not match the expected shape fails fast as
/// `MalformedResponse` carrying the serde detail.
pub fn parse_structured<T: DeserializeOwned>(text: &str) -> Result<T, CompletionError> {
    let cleaned = strip_json_fences(text);
    serde_json::from_str(cleaned).map_err(|e| CompletionError::MalformedResponse {
        detail: e.to_string(),
    })
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[derive(Debug, Deserialize)]
    struct Probe {
        answer: String,
    }

    #[test]
    fn test_parse_structured_accepts_fenced_json() {
        let reply = "```json\n{\"answer\": \"42\"}\n```";
        let probe: Probe = parse_structured(reply).unwrap();
        assert_eq!(probe.answer, "42");
    }

    #[test]
    fn test_parse_structured_missing_field_is_malformed() {
        let reply = r#"{"question": "unanswered"}"#;
        let err = parse_structured::<Probe>(reply).expect_err("must fail");
        match err {
            CompletionError::MalformedResponse { detail } => {
                assert!(
                    detail.contains("answer"),
                    "detail should name the missing field, got: {detail}"
                );
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_structured_non_json_is_malformed() {
        let err = parse_structured::<Probe>("Sorry, I cannot do that.").expect_err("must fail");
        assert!(matches!(err, CompletionError::MalformedResponse { .. }));
    }

    #[test]
    fn test_request_serializes_json_mode_without_temperature() {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            temperature: None,
            response_format: Some(ResponseFormat {
                format_type: "json_object",
            }),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""response_format":{"type":"json_object"}"#));
        assert!(
            !json.contains("temperature"),
            "unset temperature must be omitted from the wire body"
        );
    }

    #[test]
    fn test_request_serializes_temperature_without_response_format() {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![],
            temperature: Some(0.8),
            response_format: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""temperature":0.8"#));
        assert!(!json.contains("response_format"));
    }

    #[test]
    fn test_chat_response_extracts_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        assert_eq!(content.as_deref(), Some("first"));
    }

    #[test]
    fn test_api_error_body_parses() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let parsed: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Incorrect API key provided");
    }
}
