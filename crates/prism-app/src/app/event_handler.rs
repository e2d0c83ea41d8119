//! `ApplicationHandler` implementation for the winit event loop.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{WindowAttributes, WindowId};

use super::core::PrismApp;

impl ApplicationHandler for PrismApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.start_chat();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                let scale = self
                    .window
                    .as_ref()
                    .map(|w| w.scale_factor())
                    .unwrap_or(1.0);
                let logical = size.to_logical::<f64>(scale);
                self.session.resize(
                    logical.width.round() as u32,
                    logical.height.round() as u32,
                    scale,
                );
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(ref w) = self.window {
                    let logical = w.inner_size().to_logical::<f64>(scale_factor);
                    self.session.resize(
                        logical.width.round() as u32,
                        logical.height.round() as u32,
                        scale_factor,
                    );
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                if let Err(e) = self.session.frame() {
                    tracing::error!("Render error: {e}");
                }
                // Continuous animation: each frame schedules the next.
                if self.session.is_running() {
                    self.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_chat();
    }
}

impl PrismApp {
    /// Create the window and start the render session.
    /// Returns `false` if initialization failed and the event loop should exit.
    fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(&self.config.window.title)
            .with_transparent(self.config.window.transparent)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        if let Err(e) = pollster::block_on(self.session.start(window.clone())) {
            tracing::error!("Failed to initialize renderer: {e}");
            return false;
        }

        self.window = Some(window);
        tracing::info!("Window created and render session started");
        true
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }

    /// Type-to-chat input: printable keys build the prompt, Enter submits.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }

        match event.logical_key {
            Key::Named(NamedKey::Enter) => self.submit_prompt(),
            Key::Named(NamedKey::Space) => self.prompt_buffer.push(' '),
            Key::Named(NamedKey::Backspace) => {
                self.prompt_buffer.pop();
            }
            Key::Named(NamedKey::Escape) => self.prompt_buffer.clear(),
            Key::Character(c) => self.prompt_buffer.push_str(&c),
            _ => {}
        }
    }
}
