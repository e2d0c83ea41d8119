//! Claude backend: transcript bookkeeping, request building, response parsing.

use async_trait::async_trait;

use crate::{AiError, ChatBackend, Message, Role};

use super::config::ClaudeConfig;
use super::{ANTHROPIC_API_URL, ANTHROPIC_VERSION};

/// [`ChatBackend`] over the Anthropic Messages API.
///
/// Constructed with the behavior description, which is sent as the `system`
/// field on every request. Keeps its own transcript so each request carries
/// the full conversation.
pub struct ClaudeBackend {
    behavior: String,
    config: ClaudeConfig,
    transcript: Vec<Message>,
    http: reqwest::Client,
}

impl ClaudeBackend {
    pub fn new(behavior: impl Into<String>, config: ClaudeConfig) -> Self {
        Self {
            behavior: behavior.into(),
            config,
            transcript: Vec::new(),
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Build the JSON request body for the Messages API.
    fn build_request_body(&self) -> serde_json::Value {
        let messages: Vec<_> = self
            .transcript
            .iter()
            .map(|m| {
                serde_json::json!({
                    "role": m.role.as_str(),
                    "content": m.content,
                })
            })
            .collect();

        serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "system": self.behavior,
            "messages": messages,
        })
    }
}

/// Extract the first text block from a Messages API response.
fn parse_response_text(json: &serde_json::Value) -> Result<String, AiError> {
    json["content"]
        .as_array()
        .and_then(|blocks| {
            blocks.iter().find_map(|b| {
                if b["type"] == "text" {
                    b["text"].as_str().map(String::from)
                } else {
                    None
                }
            })
        })
        .ok_or_else(|| AiError::Parse("response contained no text block".into()))
}

#[async_trait]
impl ChatBackend for ClaudeBackend {
    fn add_message(&mut self, role: Role, content: &str) {
        self.transcript.push(Message {
            role,
            content: content.to_string(),
        });
    }

    async fn get_response(&mut self) -> Result<String, AiError> {
        let body = self.build_request_body();

        let response = self
            .http
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AiError::Api(format!("{status}: {detail}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::Parse(e.to_string()))?;
        let text = parse_response_text(&json)?;

        tracing::debug!(chars = text.len(), "claude reply received");
        self.transcript.push(Message {
            role: Role::Assistant,
            content: text.clone(),
        });
        Ok(text)
    }
}

// =============================================================================
// Tests
// =============================================================================
