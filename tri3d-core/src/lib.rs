/// TRI3D Core Library - Platform-independent rendering logic
///
/// Geometry, transforms, frame timing, viewport state and the shader
/// pipeline, written against the `GraphicsBackend` trait so every piece
/// can run without a browser.

pub mod app;
pub mod backend;
pub mod buffers;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod pipeline;
pub mod projection;
pub mod renderer;
pub mod shader;
pub mod transform;
pub mod viewport;

#[cfg(test)]
mod mock;

// Re-export commonly used types
pub use app::App;
pub use backend::GraphicsBackend;
pub use clock::{FrameClock, FrameTime};
pub use config::{AppConfig, KeyAction, KeyBindings};
pub use error::{FullscreenError, InitError, ShaderStage};
pub use event::{AppEvent, HostCommand};
pub use geometry::{Triangle, Vertex};
pub use projection::Projection;
pub use renderer::{FrameMatrices, SceneRenderer};
pub use shader::{ShaderInterface, ShaderSources};
pub use transform::{AnimationState, Transform};
pub use viewport::{FullscreenTransition, Size, ViewportState};
