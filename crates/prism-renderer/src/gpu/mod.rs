//! wgpu surface, device, and queue ownership.

mod context;
mod types;

pub use context::*;
pub use types::*;
