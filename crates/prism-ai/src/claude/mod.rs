//! Anthropic Messages API backend for [`crate::ChatSession`].

mod client;
mod config;

pub use client::ClaudeBackend;
pub use config::ClaudeConfig;

pub(crate) const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub(crate) const ANTHROPIC_VERSION: &str = "2023-06-01";
