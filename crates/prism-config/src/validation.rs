//! Config validation with actionable error messages.

use prism_common::{Color, ConfigError};

use crate::schema::PrismConfig;

/// Validate a loaded config. Returns the first violation found.
pub fn validate(config: &PrismConfig) -> Result<(), ConfigError> {
    let scene = &config.scene;

    if !(scene.fov_degrees > 0.0 && scene.fov_degrees < 180.0) {
        return Err(invalid(format!(
            "scene.fov_degrees must be in (0, 180), got {}",
            scene.fov_degrees
        )));
    }
    if scene.near <= 0.0 {
        return Err(invalid(format!(
            "scene.near must be > 0, got {}",
            scene.near
        )));
    }
    if scene.far <= scene.near {
        return Err(invalid(format!(
            "scene.far ({}) must be greater than scene.near ({})",
            scene.far, scene.near
        )));
    }
    if !scene.rotation_step.is_finite() || scene.rotation_step < 0.0 {
        return Err(invalid(format!(
            "scene.rotation_step must be finite and >= 0, got {}",
            scene.rotation_step
        )));
    }
    if !scene.camera_distance.is_finite() || scene.camera_distance <= 0.0 {
        return Err(invalid(format!(
            "scene.camera_distance must be > 0, got {}",
            scene.camera_distance
        )));
    }
    if Color::from_hex(&scene.edge_color).is_none() {
        return Err(invalid(format!(
            "scene.edge_color must be a #rrggbb hex color, got {:?}",
            scene.edge_color
        )));
    }
    if !(0.0..=1.0).contains(&scene.background_alpha) {
        return Err(invalid(format!(
            "scene.background_alpha must be in [0, 1], got {}",
            scene.background_alpha
        )));
    }

    if config.window.width <= 0.0 || config.window.height <= 0.0 {
        return Err(invalid(format!(
            "window dimensions must be positive, got {}x{}",
            config.window.width, config.window.height
        )));
    }

    Ok(())
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::ValidationError(msg)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> PrismConfig {
        PrismConfig::default()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&base()).is_ok());
    }

    #[test]
    fn rejects_fov_out_of_range() {
        let mut config = base();
        config.scene.fov_degrees = 0.0;
        assert!(validate(&config).is_err());
        config.scene.fov_degrees = 180.0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_inverted_clip_planes() {
        let mut config = base();
        config.scene.near = 10.0;
        config.scene.far = 1.0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("scene.far"));
    }

    #[test]
    fn rejects_negative_rotation_step() {
        let mut config = base();
        config.scene.rotation_step = -0.01;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_nan_rotation_step() {
        let mut config = base();
        config.scene.rotation_step = f64::NAN;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_bad_edge_color() {
        let mut config = base();
        config.scene.edge_color = "cyan".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("edge_color"));
    }

    #[test]
    fn rejects_multibyte_edge_color_as_validation_error() {
        // User-authored config values must come back as errors, never panic.
        let mut config = base();
        config.scene.edge_color = "#ééé".into();
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn rejects_background_alpha_above_one() {
        let mut config = base();
        config.scene.background_alpha = 1.5;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_zero_window_size() {
        let mut config = base();
        config.window.width = 0.0;
        assert!(validate(&config).is_err());
    }
}
