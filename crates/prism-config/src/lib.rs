//! Prism configuration system.
//!
//! TOML-based configuration with sensible defaults for every section, so a
//! missing or partial config file works out of the box. A default config is
//! written to the platform config directory on first run.

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::PrismConfig;

use prism_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a default `config.toml` if none exists.
pub fn load_config() -> Result<PrismConfig, ConfigError> {
    let config = loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        let config = PrismConfig::default();
        assert!(validation::validate(&config).is_ok());
    }
}
