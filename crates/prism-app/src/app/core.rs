//! PrismApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use prism_config::PrismConfig;
use prism_renderer::RenderSession;

use super::chat::ChatEvent;

/// Top-level application state.
pub struct PrismApp {
    pub(super) config: PrismConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) session: RenderSession,

    // Chat companion
    pub(super) prompt_buffer: String,
    pub(super) chat_tx: Option<std::sync::mpsc::Sender<String>>,
    pub(super) chat_rx: Option<std::sync::mpsc::Receiver<ChatEvent>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl PrismApp {
    pub fn new(config: PrismConfig) -> Self {
        let session = RenderSession::new(&config);
        Self {
            config,
            window: None,
            session,
            prompt_buffer: String::new(),
            chat_tx: None,
            chat_rx: None,
            tokio_runtime: None,
            should_exit: false,
        }
    }

    /// Start the background chat task on a small tokio runtime.
    pub(super) fn start_chat(&mut self) {
        let (prompt_tx, prompt_rx) = std::sync::mpsc::channel::<String>();
        let (event_tx, event_rx) = std::sync::mpsc::channel::<ChatEvent>();

        self.chat_tx = Some(prompt_tx);
        self.chat_rx = Some(event_rx);

        if self.tokio_runtime.is_none() {
            match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
            {
                Ok(rt) => self.tokio_runtime = Some(rt),
                Err(e) => {
                    tracing::error!("Failed to create tokio runtime: {e}");
                    return;
                }
            }
        }

        let behavior = self.config.persona.behavior.clone();
        let rt = self.tokio_runtime.as_ref().unwrap();
        rt.spawn(async move {
            super::chat::chat_task(prompt_rx, event_tx, behavior).await;
        });
    }

    /// Poll for chat events from the async task (non-blocking).
    pub(super) fn poll_chat(&mut self) {
        let Some(rx) = &self.chat_rx else { return };
        while let Ok(event) = rx.try_recv() {
            match event {
                ChatEvent::Ready { model } => {
                    tracing::info!(%model, "chat companion ready");
                }
                ChatEvent::Response(text) => {
                    tracing::info!("assistant: {text}");
                }
                ChatEvent::Error(msg) => {
                    tracing::warn!("chat error: {msg}");
                }
            }
        }
    }

    /// Send the buffered prompt to the chat task, if non-empty.
    pub(super) fn submit_prompt(&mut self) {
        let prompt = self.prompt_buffer.trim().to_string();
        self.prompt_buffer.clear();
        if prompt.is_empty() {
            return;
        }
        tracing::info!("you: {prompt}");
        if let Some(tx) = &self.chat_tx {
            if tx.send(prompt).is_err() {
                tracing::warn!("chat task is gone, prompt dropped");
            }
        }
    }
}
