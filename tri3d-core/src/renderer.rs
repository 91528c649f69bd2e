/// Per-frame scene drawing
use nalgebra::{Matrix4, Vector3, Vector4};

use crate::backend::GraphicsBackend;
use crate::buffers::GeometryBuffers;
use crate::config::AppConfig;
use crate::geometry::{COLOR_COMPONENTS, POSITION_COMPONENTS};
use crate::pipeline::ShaderProgram;
use crate::projection::Projection;
use crate::transform::{AnimationState, Transform};

/// Matrices uploaded for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub projection: Matrix4<f32>,
    pub model_view: Matrix4<f32>,
}

/// Draws the triangle. Every frame takes the same path; only the rotation
/// and the aspect ratio vary.
#[derive(Debug, Clone)]
pub struct SceneRenderer {
    clear_color: Vector4<f32>,
    clear_depth: f32,
    projection: Projection,
    translation: Vector3<f32>,
    axis: Vector3<f32>,
    speed: f32,
}

impl SceneRenderer {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            clear_color: config.clear_color,
            clear_depth: config.clear_depth,
            projection: Projection::from_config(config, 1, 1),
            translation: config.model_translation,
            axis: config.rotation_axis,
            speed: config.rotation_speed,
        }
    }

    pub fn matrices(&self, rotation: f32, aspect: f32) -> FrameMatrices {
        let projection = Projection {
            aspect,
            ..self.projection
        };
        FrameMatrices {
            projection: projection.matrix(),
            model_view: Transform::model_view(&self.translation, &self.axis, rotation),
        }
    }

    /// Draws with the current rotation, then advances it by `dt` seconds.
    pub fn draw_frame<B: GraphicsBackend>(
        &self,
        gl: &B,
        program: &ShaderProgram<B>,
        buffers: &GeometryBuffers<B>,
        animation: &mut AnimationState,
        aspect: f32,
        dt: f32,
    ) -> FrameMatrices {
        gl.enable_depth_test();
        gl.clear(&self.clear_color, self.clear_depth);

        let matrices = self.matrices(animation.rotation, aspect);

        gl.bind_vertex_attribute(&buffers.position, program.vertex_position, POSITION_COMPONENTS);
        gl.bind_vertex_attribute(&buffers.color, program.vertex_color, COLOR_COMPONENTS);

        gl.use_program(&program.program);
        gl.uniform_matrix4(program.projection_matrix.as_ref(), &matrices.projection);
        gl.uniform_matrix4(program.model_view_matrix.as_ref(), &matrices.model_view);

        gl.draw_triangle_strip(0, buffers.vertex_count);

        animation.advance(dt, self.speed);
        matrices
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
