/// Application state and event dispatch
use crate::backend::GraphicsBackend;
use crate::buffers::{GeometryBufferStore, GeometryBuffers};
use crate::config::{AppConfig, KeyAction};
use crate::error::InitError;
use crate::event::{AppEvent, HostCommand};
use crate::geometry::Triangle;
use crate::pipeline::{ShaderPipelineBuilder, ShaderProgram};
use crate::renderer::{FrameMatrices, SceneRenderer};
use crate::shader::ShaderSources;
use crate::transform::AnimationState;
use crate::viewport::{FullscreenTransition, Size, ViewportState};

/// Owns the rendering context and everything built on it.
///
/// Exactly one program and one buffer set exist for the lifetime of an
/// `App`; nothing is rebuilt after `init`.
pub struct App<B: GraphicsBackend> {
    backend: B,
    program: ShaderProgram<B>,
    buffers: GeometryBuffers<B>,
    renderer: SceneRenderer,
    animation: AnimationState,
    viewport: ViewportState,
    config: AppConfig,
    last_frame: Option<FrameMatrices>,
}

impl<B: GraphicsBackend> App<B> {
    /// Builds the pipeline and uploads geometry. Any error here is terminal.
    pub fn init(
        backend: B,
        initial: Size,
        sources: ShaderSources<'_>,
        config: AppConfig,
    ) -> Result<Self, InitError> {
        log::info!("canvas size {}x{}", initial.width, initial.height);

        let program = ShaderPipelineBuilder::new(&backend).build(sources)?;
        let buffers = GeometryBufferStore::upload(&backend, &Triangle::rgb())?;
        set_viewport(&backend, initial);

        Ok(Self {
            renderer: SceneRenderer::new(&config),
            backend,
            program,
            buffers,
            animation: AnimationState::new(),
            viewport: ViewportState::new(initial),
            config,
            last_frame: None,
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Matrices uploaded by the most recent frame
    pub fn last_frame(&self) -> Option<&FrameMatrices> {
        self.last_frame.as_ref()
    }

    pub fn handle(&mut self, event: AppEvent) -> HostCommand {
        match event {
            AppEvent::Frame { timestamp_ms } => {
                self.frame(timestamp_ms);
                HostCommand::None
            }
            AppEvent::Resize {
                inner_width,
                inner_height,
            } => {
                self.resize(Size::new(inner_width, inner_height));
                HostCommand::None
            }
            AppEvent::KeyDown { key_code } => self.key_down(key_code),
            AppEvent::FullscreenChanged { active } => {
                if let Some(size) = self.viewport.sync_fullscreen(active) {
                    set_viewport(&self.backend, size);
                }
                HostCommand::None
            }
            AppEvent::Click => HostCommand::None,
        }
    }

    fn frame(&mut self, timestamp_ms: f64) {
        let time = self.animation.clock.tick(timestamp_ms);
        let matrices = self.renderer.draw_frame(
            &self.backend,
            &self.program,
            &self.buffers,
            &mut self.animation,
            self.viewport.aspect(),
            time.dt,
        );
        self.last_frame = Some(matrices);
    }

    /// Returns the canvas size the host should apply
    pub fn resize(&mut self, window_inner: Size) -> Size {
        let size = self.viewport.resize(window_inner);
        set_viewport(&self.backend, size);
        size
    }

    fn key_down(&mut self, key_code: u32) -> HostCommand {
        let transition = match self.config.keys.action_for(key_code) {
            Some(KeyAction::ToggleFullscreen) => self.viewport.toggle_fullscreen(),
            Some(KeyAction::ExitFullscreen) => self.viewport.force_exit(),
            None => return HostCommand::None,
        };
        log::debug!("fullscreen transition: {transition:?}");
        match transition {
            FullscreenTransition::Enter => HostCommand::RequestFullscreen,
            FullscreenTransition::Exit => HostCommand::ExitFullscreen,
        }
    }
}

/// GL takes signed dimensions; oversized values saturate
fn set_viewport<B: GraphicsBackend>(backend: &B, size: Size) {
    let width = i32::try_from(size.width).unwrap_or(i32::MAX);
    let height = i32::try_from(size.height).unwrap_or(i32::MAX);
    backend.set_viewport(0, 0, width, height);
}
