//! Conversational AI layer for Prism.
//!
//! Provides:
//! - [`ChatSession`]: ordered dialogue history with a single-flight
//!   request protocol
//! - [`ChatBackend`]: the injected capability that produces replies
//! - [`claude`]: a `ChatBackend` over the Anthropic Messages API

pub mod claude;
pub mod session;

use async_trait::async_trait;

pub use claude::{ClaudeBackend, ClaudeConfig};
pub use session::ChatSession;

/// One entry of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire-format role name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// The opaque capability that turns a conversation into a reply.
///
/// A backend is constructed externally with one behavior description and
/// bound 1:1 to a [`ChatSession`]. `add_message` is fire-and-forget; the
/// backend records its own reply after a successful `get_response`, so
/// callers never mirror assistant messages back into it.
#[async_trait]
pub trait ChatBackend: Send {
    /// Append a role-tagged message to the backend's transcript.
    fn add_message(&mut self, role: Role, content: &str);

    /// Produce the assistant's reply to the transcript so far.
    async fn get_response(&mut self) -> Result<String, AiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("prompt must not be empty")]
    EmptyPrompt,
    #[error("session is busy with another request")]
    Busy,
    #[error("API error: {0}")]
    Api(String),
    #[error("rate limited")]
    RateLimited,
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("timeout")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn role_as_str_matches_wire_format() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn ai_error_display() {
        assert_eq!(AiError::EmptyPrompt.to_string(), "prompt must not be empty");
        assert_eq!(
            AiError::Busy.to_string(),
            "session is busy with another request"
        );
        assert_eq!(AiError::RateLimited.to_string(), "rate limited");
        assert_eq!(
            AiError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
    }
}
