//! Render session manager for Prism.
//!
//! Owns the 3D scene (one rotating wireframe cube), a perspective camera,
//! and the wgpu surface/device, and exposes the start/resize/frame/stop
//! lifecycle to the hosting winit shell.

pub mod camera;
pub mod gpu;
pub mod matrix;
pub mod mesh;
pub mod pipeline;
pub mod scene;
pub mod session;

pub use camera::CameraState;
pub use gpu::{GpuContext, RendererError};
pub use scene::SceneState;
pub use session::{FrameHandle, RenderSession, Viewport};
