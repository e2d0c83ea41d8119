//! Shared types for the prism crates: error taxonomy and small value types.

pub mod errors;
pub mod types;

pub use errors::{ConfigError, PrismError};
pub use types::Color;
