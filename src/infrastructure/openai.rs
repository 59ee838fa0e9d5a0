// src/infrastructure/openai.rs
use crate::application::CompletionClient;
use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::domain::{ChatMessage, ChatRequest, DomainError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for OpenAI-compatible `/chat/completions` endpoints
pub struct OpenAiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct CompletionPayload<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl OpenAiClient {
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| DomainError::Api(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl CompletionClient for OpenAiClient {
    #[instrument(level = "debug", skip(self, request), fields(model = %request.model))]
    fn complete(&self, request: &ChatRequest) -> Result<Option<String>, DomainError> {
        let payload = CompletionPayload {
            model: &request.model,
            messages: &request.messages,
        };

        let response = self
            .http
            .post(self.url())
            .bearer_auth(&request.api_key)
            .json(&payload)
            .send()
            .map_err(|e| DomainError::Api(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| DomainError::Api(format!("Failed to read response: {}", e)))?;
        debug!(%status, bytes = body.len(), "Chat completion returned");

        if !status.is_success() {
            return Err(DomainError::Api(error_message(status.as_u16(), &body)));
        }

        parse_completion(&body)
    }
}

/// First choice's message content, `None` when absent
pub fn parse_completion(body: &str) -> Result<Option<String>, DomainError> {
    if let Ok(err) = serde_json::from_str::<ErrorResponse>(body) {
        return Err(DomainError::Api(err.error.message));
    }

    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::Api(format!("Failed to parse response JSON: {}", e)))?;

    Ok(response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content))
}

/// Human readable message for a non-success HTTP status
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) => format!("HTTP {}: {}", status, err.error.message),
        Err(_) => format!("HTTP {}: {}", status, body.trim()),
    }
}
