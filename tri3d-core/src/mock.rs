/// Recording backend for exercising the renderer without a GPU
use std::cell::{Cell, RefCell};

use nalgebra::{Matrix4, Vector4};

use crate::backend::GraphicsBackend;
use crate::error::ShaderStage;
use crate::shader::{
    ShaderInterface, ATTR_VERTEX_COLOR, ATTR_VERTEX_POSITION, UNIFORM_MODEL_VIEW_MATRIX,
    UNIFORM_PROJECTION_MATRIX,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(u32, ShaderStage),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    DeleteProgram(u32),
    CreateBuffer(u32, Vec<f32>),
    Clear(Vector4<f32>, f32),
    EnableDepthTest,
    Viewport(i32, i32, i32, i32),
    BindAttribute { buffer: u32, location: Option<u32>, components: i32 },
    UseProgram(u32),
    UniformMatrix4(Option<&'static str>, Matrix4<f32>),
    DrawTriangleStrip(i32, i32),
}

/// Shaders "compile" when the reflection parser accepts them
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: RefCell<Vec<Call>>,
    pub link_error: Option<String>,
    pub refuse_buffers: bool,
    next_id: Cell<u32>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_link(log: &str) -> Self {
        Self {
            link_error: Some(log.to_string()),
            ..Self::default()
        }
    }

    pub fn refusing_buffers() -> Self {
        Self {
            refuse_buffers: true,
            ..Self::default()
        }
    }

    fn id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    pub fn take_calls(&self) -> Vec<Call> {
        self.calls.borrow_mut().drain(..).collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }
}

impl GraphicsBackend for RecordingBackend {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = &'static str;

    fn create_shader(&self, stage: ShaderStage) -> Option<u32> {
        let id = self.id();
        self.record(Call::CreateShader(id, stage));
        Some(id)
    }

    fn compile_shader(&self, shader: &u32, source: &str) -> Result<(), String> {
        self.record(Call::CompileShader(*shader));
        ShaderInterface::parse(source)
            .map(|_| ())
            .map_err(|e| format!("ERROR: 0:{e}"))
    }

    fn delete_shader(&self, shader: &u32) {
        self.record(Call::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<u32> {
        let id = self.id();
        self.record(Call::CreateProgram(id));
        Some(id)
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        self.record(Call::AttachShader(*program, *shader));
    }

    fn link_program(&self, program: &u32) -> Result<(), String> {
        self.record(Call::LinkProgram(*program));
        match &self.link_error {
            Some(log) => Err(log.clone()),
            None => Ok(()),
        }
    }

    fn delete_program(&self, program: &u32) {
        self.record(Call::DeleteProgram(*program));
    }

    fn attrib_location(&self, _program: &u32, name: &str) -> Option<u32> {
        match name {
            ATTR_VERTEX_POSITION => Some(0),
            ATTR_VERTEX_COLOR => Some(1),
            _ => None,
        }
    }

    fn uniform_location(&self, _program: &u32, name: &str) -> Option<&'static str> {
        match name {
            UNIFORM_PROJECTION_MATRIX => Some(UNIFORM_PROJECTION_MATRIX),
            UNIFORM_MODEL_VIEW_MATRIX => Some(UNIFORM_MODEL_VIEW_MATRIX),
            _ => None,
        }
    }

    fn create_static_buffer(&self, data: &[f32]) -> Option<u32> {
        if self.refuse_buffers {
            return None;
        }
        let id = self.id();
        self.record(Call::CreateBuffer(id, data.to_vec()));
        Some(id)
    }

    fn clear(&self, color: &Vector4<f32>, depth: f32) {
        self.record(Call::Clear(*color, depth));
    }

    fn enable_depth_test(&self) {
        self.record(Call::EnableDepthTest);
    }

    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn bind_vertex_attribute(&self, buffer: &u32, location: Option<u32>, components: i32) {
        self.record(Call::BindAttribute {
            buffer: *buffer,
            location,
            components,
        });
    }

    fn use_program(&self, program: &u32) {
        self.record(Call::UseProgram(*program));
    }

    fn uniform_matrix4(&self, location: Option<&&'static str>, matrix: &Matrix4<f32>) {
        self.record(Call::UniformMatrix4(location.copied(), *matrix));
    }

    fn draw_triangle_strip(&self, first: i32, count: i32) {
        self.record(Call::DrawTriangleStrip(first, count));
    }
}
