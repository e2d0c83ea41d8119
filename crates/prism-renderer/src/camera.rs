//! Perspective camera state.

use prism_config::schema::SceneConfig;

use crate::matrix::{self, Mat4};

/// Projection parameters plus position along the view axis.
///
/// `aspect` is derived from the viewport and must equal `width / height`
/// immediately after every resize. The distance is re-asserted from
/// `home_distance` on every resize rather than assumed to persist.
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Current distance from the origin along +Z.
    pub distance: f32,
    home_distance: f32,
}

impl CameraState {
    pub fn from_config(scene: &SceneConfig) -> Self {
        let distance = scene.camera_distance as f32;
        Self {
            fov_y: (scene.fov_degrees as f32).to_radians(),
            aspect: 1.0,
            near: scene.near as f32,
            far: scene.far as f32,
            distance,
            home_distance: distance,
        }
    }

    /// Resize handler: recompute aspect and re-assert the camera distance.
    /// A zero height is ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
        self.distance = self.home_distance;
    }

    /// Current projection matrix.
    pub fn projection(&self) -> Mat4 {
        matrix::perspective(self.fov_y, self.aspect, self.near, self.far)
    }

    /// View matrix: the world pushed back by the camera distance.
    pub fn view(&self) -> Mat4 {
        matrix::translate(0.0, 0.0, -self.distance)
    }
}

// =============================================================================
// Tests
// =============================================================================
