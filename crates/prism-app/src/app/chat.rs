//! Background async task that manages the chat session.

use prism_ai::{ChatSession, ClaudeBackend, ClaudeConfig};

/// Events received from the async chat task.
pub(super) enum ChatEvent {
    /// The backend is configured and ready to answer.
    Ready { model: String },
    /// A completed assistant reply.
    Response(String),
    /// The request failed; the session stays usable.
    Error(String),
}

/// Runs until the prompt sender is dropped.
pub(super) async fn chat_task(
    prompt_rx: std::sync::mpsc::Receiver<String>,
    event_tx: std::sync::mpsc::Sender<ChatEvent>,
    behavior: String,
) {
    let config = match ClaudeConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            let _ = event_tx.send(ChatEvent::Error(e.to_string()));
            return;
        }
    };

    let _ = event_tx.send(ChatEvent::Ready {
        model: config.model.clone(),
    });

    let backend = ClaudeBackend::new(behavior.clone(), config);
    let mut session = ChatSession::new(behavior, Box::new(backend));

    while let Ok(prompt) = tokio::task::block_in_place(|| prompt_rx.recv()) {
        match session.get_response(&prompt).await {
            Ok(reply) => {
                let _ = event_tx.send(ChatEvent::Response(reply));
            }
            Err(e) => {
                let _ = event_tx.send(ChatEvent::Error(e.to_string()));
            }
        }
    }
}
