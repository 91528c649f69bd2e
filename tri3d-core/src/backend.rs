/// The graphics API surface the renderer needs
use nalgebra::{Matrix4, Vector4};

use crate::error::ShaderStage;

/// A GL-like immediate-mode API.
///
/// Handles are opaque; failures to create one surface as `None`, compiler
/// and linker failures as the driver's info log. Unresolved attribute and
/// uniform locations are `None` and every call taking one is a no-op for
/// `None`, mirroring WebGL.
pub trait GraphicsBackend {
    type Shader;
    type Program;
    type Buffer;
    type UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn compile_shader(&self, shader: &Self::Shader, source: &str) -> Result<(), String>;
    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program) -> Result<(), String>;
    fn delete_program(&self, program: &Self::Program);

    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;
    fn uniform_location(&self, program: &Self::Program, name: &str) -> Option<Self::UniformLocation>;

    /// Uploads `data` into a new array buffer with static usage
    fn create_static_buffer(&self, data: &[f32]) -> Option<Self::Buffer>;

    /// Clears color and depth with the given values
    fn clear(&self, color: &Vector4<f32>, depth: f32);
    /// Enables depth testing with a less-or-equal comparison
    fn enable_depth_test(&self);
    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32);

    /// Points `location` at `buffer` as tightly packed f32 vectors and enables it
    fn bind_vertex_attribute(&self, buffer: &Self::Buffer, location: Option<u32>, components: i32);
    fn use_program(&self, program: &Self::Program);
    /// Column-major upload, never transposed
    fn uniform_matrix4(&self, location: Option<&Self::UniformLocation>, matrix: &Matrix4<f32>);
    fn draw_triangle_strip(&self, first: i32, count: i32);
}
