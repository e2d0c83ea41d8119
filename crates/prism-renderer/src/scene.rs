//! Scene state: the rotating cube's animation.

use prism_config::schema::SceneConfig;

use crate::matrix::{self, Mat4};

/// Cumulative rotation of the cube plus a frame counter.
///
/// The per-frame increment is fixed: after N frames the rotation on each
/// axis is N × step, independent of wall-clock time. The loop is paced by
/// the display (vsync), so motion tracks the nominal frame rate rather
/// than elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct SceneState {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub frames: u64,
    step: f32,
}

impl SceneState {
    pub fn from_config(scene: &SceneConfig) -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            frames: 0,
            step: scene.rotation_step as f32,
        }
    }

    /// Advance one frame: fixed increment on both axes.
    pub fn advance(&mut self) {
        self.rotation_x += self.step;
        self.rotation_y += self.step;
        self.frames += 1;
    }

    /// Per-frame rotation increment in radians.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Model matrix for the cube: yaw applied after pitch.
    pub fn model(&self) -> Mat4 {
        matrix::mul(
            &matrix::rotate_y(self.rotation_y),
            &matrix::rotate_x(self.rotation_x),
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        let scene = SceneState::from_config(&SceneConfig::default());
        assert_eq!(scene.frames, 0);
        assert_eq!(scene.rotation_x, 0.0);
        assert_eq!(scene.rotation_y, 0.0);
    }

    #[test]
    fn rotation_is_frame_count_driven() {
        let mut scene = SceneState::from_config(&SceneConfig::default());
        let n = 240;
        for _ in 0..n {
            scene.advance();
        }
        assert_eq!(scene.frames, n);

        // Accumulate the same way the loop does, so f32 rounding matches.
        let mut expected = 0.0f32;
        for _ in 0..n {
            expected += scene.step();
        }
        assert_eq!(scene.rotation_x, expected);
        assert_eq!(scene.rotation_y, expected);
        assert!((expected - n as f32 * scene.step()).abs() < 1e-3);
    }

    #[test]
    fn axes_advance_in_lockstep() {
        let mut scene = SceneState::from_config(&SceneConfig::default());
        for _ in 0..17 {
            scene.advance();
        }
        assert_eq!(scene.rotation_x, scene.rotation_y);
    }

    #[test]
    fn model_changes_as_frames_advance() {
        let mut scene = SceneState::from_config(&SceneConfig::default());
        let before = scene.model();
        for _ in 0..30 {
            scene.advance();
        }
        let after = scene.model();
        let diff: f32 = before
            .iter()
            .zip(after.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        assert!(diff > 1e-3, "rotation should alter the model matrix");
    }

    #[test]
    fn zero_step_freezes_the_cube() {
        let mut config = SceneConfig::default();
        config.rotation_step = 0.0;
        let mut scene = SceneState::from_config(&config);
        scene.advance();
        scene.advance();
        assert_eq!(scene.frames, 2);
        assert_eq!(scene.rotation_x, 0.0);
    }
}
