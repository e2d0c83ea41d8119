//! Graceful shutdown: stop rendering, drop the chat task, stop tokio.

use std::time::Duration;

use super::core::PrismApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl PrismApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Stop the render session (cancel the frame loop, release the GPU)
    /// 2. Drop the chat channels (the recv loop in the task exits)
    /// 3. Shut down the tokio runtime (cancels the chat task)
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        // 1. Stop rendering before the window goes away
        self.session.stop();

        // 2. Dropping the sender ends the chat task's recv loop
        self.chat_tx = None;
        self.chat_rx = None;

        // 3. Shut down tokio runtime
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app::PrismApp;
    use prism_config::PrismConfig;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = PrismApp::new(PrismConfig::default());

        app.shutdown();

        assert!(app.chat_tx.is_none());
        assert!(app.chat_rx.is_none());
        assert!(app.tokio_runtime.is_none());
        assert!(!app.session.is_running());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = PrismApp::new(PrismConfig::default());

        app.shutdown();
        app.shutdown(); // second call must not panic

        assert!(!app.session.is_running());
    }
}
