//! Conversation session: ordered history + single-flight request protocol.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::{AiError, ChatBackend, Message, Role};

/// Guard that clears the `busy` flag on drop, so the flag is released even
/// when the request errors out or the future is cancelled mid-flight.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy flag. Fails if a request is in flight.
    fn acquire(flag: &'a AtomicBool) -> Result<Self, AiError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(AiError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// One ongoing dialogue against an injected chat backend.
///
/// History is append-only for the life of the session and is the only state
/// mutated by [`ChatSession::get_response`]. The behavior description is
/// fixed at construction; the backend must have been constructed with the
/// same description and is bound 1:1 to this session.
pub struct ChatSession {
    persona: String,
    history: Vec<Message>,
    backend: Box<dyn ChatBackend>,
    busy: AtomicBool,
}

impl ChatSession {
    pub fn new(persona: impl Into<String>, backend: Box<dyn ChatBackend>) -> Self {
        Self {
            persona: persona.into(),
            history: Vec::new(),
            backend,
            busy: AtomicBool::new(false),
        }
    }

    /// Run one conversational turn: append the user prompt, ask the backend
    /// for a reply, append it, return it.
    ///
    /// On backend failure the user message stays in history (not rolled
    /// back), so a retried prompt keeps its conversational context; the
    /// error propagates unchanged. Only one call may be in flight per
    /// session; a concurrent second call fails with [`AiError::Busy`]
    /// before touching history.
    pub async fn get_response(&mut self, prompt: &str) -> Result<String, AiError> {
        if prompt.trim().is_empty() {
            return Err(AiError::EmptyPrompt);
        }
        let _guard = BusyGuard::acquire(&self.busy)?;

        self.history.push(Message {
            role: Role::User,
            content: prompt.to_string(),
        });
        self.backend.add_message(Role::User, prompt);

        tracing::debug!(turn = self.history.len() / 2 + 1, "awaiting backend response");
        let response = self.backend.get_response().await?;

        self.history.push(Message {
            role: Role::Assistant,
            content: response.clone(),
        });
        Ok(response)
    }

    /// The behavior description this session was constructed with.
    pub fn persona(&self) -> &str {
        &self.persona
    }

    /// Full conversation history, in conversational order.
    pub fn history(&self) -> &[Message] {
        &self.history
    }
}

// =============================================================================
// Tests
// =============================================================================
