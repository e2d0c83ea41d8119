//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the render session, and the chat task.

mod chat;
mod core;
mod event_handler;
mod shutdown;

pub use core::PrismApp;
