//! Render session lifecycle.
//!
//! A [`RenderSession`] is created from config with pure state only; GPU
//! resources come and go with `start`/`stop`. Camera and scene state
//! survive across restarts so a stopped session can resume where it was.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use winit::window::Window;

use prism_common::types::Color;
use prism_config::PrismConfig;

use crate::camera::CameraState;
use crate::gpu::{GpuContext, RendererError};
use crate::matrix;
use crate::mesh::generate_cube_mesh;
use crate::pipeline::{CubePipeline, CubeUniforms};
use crate::scene::SceneState;

/// Logical viewport dimensions plus the device pixel ratio.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Physical pixel width (logical × ratio, at least 1).
    pub fn physical_width(&self) -> u32 {
        ((self.width as f64 * self.pixel_ratio).round() as u32).max(1)
    }

    /// Physical pixel height (logical × ratio, at least 1).
    pub fn physical_height(&self) -> u32 {
        ((self.height as f64 * self.pixel_ratio).round() as u32).max(1)
    }
}

/// Cancellation token for the frame loop.
///
/// Cancelled before GPU resources are torn down, so a frame request that
/// races with `stop` becomes a no-op instead of touching a dead surface.
#[derive(Debug, Clone)]
pub struct FrameHandle {
    alive: Arc<AtomicBool>,
}

impl FrameHandle {
    fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}

/// Everything that only exists while the session is running.
struct GpuResources {
    gpu: GpuContext,
    pipeline: CubePipeline,
    handle: FrameHandle,
}

/// Owns the scene, the camera, and (while running) the GPU resources.
pub struct RenderSession {
    viewport: Viewport,
    camera: CameraState,
    scene: SceneState,
    edge_color: [f32; 4],
    clear_color: wgpu::Color,
    resources: Option<GpuResources>,
}

impl RenderSession {
    /// Build the pure session state from config. No GPU work happens here.
    pub fn new(config: &PrismConfig) -> Self {
        let edge = Color::from_hex(&config.scene.edge_color)
            .unwrap_or(Color {
                r: 0,
                g: 212,
                b: 255,
            })
            .to_f32();
        Self {
            viewport: Viewport {
                width: config.window.width.round() as u32,
                height: config.window.height.round() as u32,
                pixel_ratio: 1.0,
            },
            camera: CameraState::from_config(&config.scene),
            scene: SceneState::from_config(&config.scene),
            edge_color: [edge[0], edge[1], edge[2], 1.0],
            clear_color: wgpu::Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: config.scene.background_alpha,
            },
            resources: None,
        }
    }

    /// Acquire GPU resources and attach to `window`.
    ///
    /// Runs one resize pass from the window's actual size before the first
    /// frame, so the aspect ratio is correct from frame zero.
    pub async fn start(&mut self, window: Arc<Window>) -> Result<(), RendererError> {
        if self.resources.is_some() {
            tracing::warn!("render session already running, ignoring start");
            return Ok(());
        }

        let gpu = GpuContext::new(window.clone()).await?;
        let (pw, ph) = gpu.size();
        let pipeline = CubePipeline::new(&gpu.device, gpu.format(), &generate_cube_mesh(), pw, ph);

        self.resources = Some(GpuResources {
            gpu,
            pipeline,
            handle: FrameHandle::new(),
        });

        let scale = window.scale_factor();
        let logical = window.inner_size().to_logical::<f64>(scale);
        self.resize(
            logical.width.round() as u32,
            logical.height.round() as u32,
            scale,
        );

        tracing::info!(
            width = self.viewport.width,
            height = self.viewport.height,
            pixel_ratio = self.viewport.pixel_ratio,
            "render session started"
        );
        Ok(())
    }

    /// Handle a viewport change: logical dimensions plus the pixel ratio.
    /// Zero dimensions are ignored (minimized window).
    pub fn resize(&mut self, width: u32, height: u32, pixel_ratio: f64) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Viewport {
            width,
            height,
            pixel_ratio,
        };
        self.camera.set_viewport(width, height);

        if let Some(res) = &mut self.resources {
            let pw = self.viewport.physical_width();
            let ph = self.viewport.physical_height();
            res.gpu.resize(pw, ph);
            res.pipeline.resize(&res.gpu.device, pw, ph);
        }
    }

    /// Render one frame: advance the animation, then draw.
    ///
    /// Without live GPU resources this is a no-op that leaves the scene
    /// untouched, so frame requests racing a teardown do nothing.
    pub fn frame(&mut self) -> Result<(), RendererError> {
        let Some(res) = &mut self.resources else {
            return Ok(());
        };
        if !res.handle.is_live() {
            return Ok(());
        }

        self.scene.advance();

        let mvp = matrix::mul(
            &self.camera.projection(),
            &matrix::mul(&self.camera.view(), &self.scene.model()),
        );
        res.pipeline.update_uniforms(
            &res.gpu.queue,
            &CubeUniforms {
                mvp,
                edge_color: self.edge_color,
            },
        );

        let frame = match res.gpu.current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Outdated) | Err(wgpu::SurfaceError::Lost) => {
                let (w, h) = res.gpu.size();
                res.gpu.resize(w, h);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = res
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });
        res.pipeline.render(&mut encoder, &view, self.clear_color);
        res.gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }

    /// Tear down GPU resources. Cancels the frame handle before the drop
    /// so in-flight frame requests see a dead handle. Idempotent.
    pub fn stop(&mut self) {
        if let Some(res) = self.resources.take() {
            res.handle.cancel();
            drop(res);
            tracing::info!("render session stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.resources.is_some()
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> RenderSession {
        RenderSession::new(&PrismConfig::default())
    }

    #[test]
    fn new_session_is_not_running() {
        let session = session();
        assert!(!session.is_running());
        assert_eq!(session.scene().frames, 0);
    }

    #[test]
    fn resize_keeps_aspect_exact() {
        let mut session = session();
        session.resize(1024, 768, 2.0);
        assert_eq!(session.camera().aspect, 1024.0 / 768.0);
        session.resize(500, 250, 2.0);
        assert_eq!(session.camera().aspect, 2.0);
    }

    #[test]
    fn resize_with_zero_dimension_is_ignored() {
        let mut session = session();
        session.resize(800, 600, 1.0);
        session.resize(0, 600, 1.0);
        session.resize(800, 0, 1.0);
        assert_eq!(session.viewport().width, 800);
        assert_eq!(session.viewport().height, 600);
        assert_eq!(session.camera().aspect, 800.0 / 600.0);
    }

    #[test]
    fn stop_before_start_is_a_no_op() {
        let mut session = session();
        session.stop();
        session.stop();
        assert!(!session.is_running());
    }

    #[test]
    fn frame_without_resources_does_not_advance_the_scene() {
        let mut session = session();
        session.frame().unwrap();
        session.frame().unwrap();
        assert_eq!(session.scene().frames, 0);
    }

    #[test]
    fn frame_handle_cancellation() {
        let handle = FrameHandle::new();
        assert!(handle.is_live());
        let clone = handle.clone();
        clone.cancel();
        assert!(!handle.is_live());
    }

    #[test]
    fn viewport_physical_size_rounds_and_clamps() {
        let vp = Viewport {
            width: 960,
            height: 640,
            pixel_ratio: 1.5,
        };
        assert_eq!(vp.physical_width(), 1440);
        assert_eq!(vp.physical_height(), 960);

        let tiny = Viewport {
            width: 1,
            height: 1,
            pixel_ratio: 0.1,
        };
        assert_eq!(tiny.physical_width(), 1);
        assert_eq!(tiny.physical_height(), 1);
    }

    #[test]
    fn fallback_edge_color_on_bad_hex() {
        let mut config = PrismConfig::default();
        config.scene.edge_color = "not-a-color".into();
        let session = RenderSession::new(&config);
        assert!(session.edge_color[3] == 1.0);
    }
}
