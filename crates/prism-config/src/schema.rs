//! Configuration schema types.
//!
//! Every section is `#[serde(default)]` so partial config files deserialize
//! cleanly, with the missing fields filled in from the defaults below.

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    pub window: WindowConfig,
    pub scene: SceneConfig,
    pub persona: PersonaConfig,
    pub logging: LoggingConfig,
}

/// Host window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub transparent: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Prism".into(),
            width: 960.0,
            height: 640.0,
            transparent: true,
        }
    }
}

/// 3D scene and camera settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Per-frame rotation increment in radians, applied to both axes.
    pub rotation_step: f64,
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    /// Camera distance from the origin along the view axis.
    pub camera_distance: f64,
    /// Near clip plane.
    pub near: f64,
    /// Far clip plane.
    pub far: f64,
    /// Wireframe edge color as `#rrggbb`.
    pub edge_color: String,
    /// Clear alpha for the surface (0.0 = fully transparent background).
    pub background_alpha: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            rotation_step: 0.01,
            fov_degrees: 75.0,
            camera_distance: 5.0,
            near: 0.1,
            far: 1000.0,
            edge_color: "#00d4ff".into(),
            background_alpha: 0.0,
        }
    }
}

/// Assistant persona settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    /// Behavior description handed to the chat backend at construction.
    pub behavior: String,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            behavior: "You are a friendly virtual character living inside a \
                       3D demo application. Keep replies short, warm, and in \
                       character."
                .into(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level for the `prism` crates (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_matches_demo_constants() {
        let scene = SceneConfig::default();
        assert!((scene.fov_degrees - 75.0).abs() < f64::EPSILON);
        assert!((scene.camera_distance - 5.0).abs() < f64::EPSILON);
        assert!((scene.near - 0.1).abs() < f64::EPSILON);
        assert!((scene.far - 1000.0).abs() < f64::EPSILON);
        assert!((scene.rotation_step - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_toml_deserializes_to_defaults() {
        let config: PrismConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "Prism");
        assert_eq!(config.scene.edge_color, "#00d4ff");
        assert_eq!(config.logging.level, "info");
        assert!(!config.persona.behavior.is_empty());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: PrismConfig = toml::from_str(
            r##"
            [scene]
            rotation_step = 0.02
            edge_color = "#ff0000"
            "##,
        )
        .unwrap();
        assert!((config.scene.rotation_step - 0.02).abs() < f64::EPSILON);
        assert_eq!(config.scene.edge_color, "#ff0000");
        // untouched fields keep defaults
        assert!((config.scene.fov_degrees - 75.0).abs() < f64::EPSILON);
        assert_eq!(config.window.title, "Prism");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = PrismConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: PrismConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.window.title, config.window.title);
        assert_eq!(parsed.scene.edge_color, config.scene.edge_color);
        assert_eq!(parsed.persona.behavior, config.persona.behavior);
    }
}
