//! TOML loading from the platform config directory.

use std::path::{Path, PathBuf};

use prism_common::ConfigError;

use crate::schema::PrismConfig;

/// Default config written on first run. Kept as a commented template so
/// users discover the available settings.
const DEFAULT_TEMPLATE: &str = r##"# Prism configuration

[window]
title = "Prism"
width = 960.0
height = 640.0
transparent = true

[scene]
# Radians added to each rotation axis every frame.
rotation_step = 0.01
fov_degrees = 75.0
camera_distance = 5.0
near = 0.1
far = 1000.0
edge_color = "#00d4ff"
background_alpha = 0.0

[persona]
behavior = "You are a friendly virtual character living inside a 3D demo application. Keep replies short, warm, and in character."

[logging]
level = "info"
"##;

/// Path to `config.toml` in the OS config directory.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("prism").join("config.toml"))
}

/// Load config from the default path, writing a template if none exists.
pub fn load_default() -> Result<PrismConfig, ConfigError> {
    let Some(path) = config_path() else {
        tracing::warn!("no config directory on this platform, using defaults");
        return Ok(PrismConfig::default());
    };

    if !path.exists() {
        write_template(&path)?;
        tracing::info!(path = %path.display(), "wrote default config");
    }

    load_from_path(&path)
}

/// Load and parse a config file from an explicit path.
pub fn load_from_path(path: &Path) -> Result<PrismConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn write_template(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }
    std::fs::write(path, DEFAULT_TEMPLATE).map_err(|e| ConfigError::IoError(e.to_string()))
}

// =============================================================================
// Tests
// =============================================================================
