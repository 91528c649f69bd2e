/// Shader compilation, linking and binding resolution
use crate::backend::GraphicsBackend;
use crate::error::{InitError, ShaderStage};
use crate::shader::{
    ShaderInterface, ShaderSources, ATTR_VERTEX_COLOR, ATTR_VERTEX_POSITION,
    UNIFORM_MODEL_VIEW_MATRIX, UNIFORM_PROJECTION_MATRIX,
};

/// A linked program and its resolved bindings.
///
/// Any binding may be `None` when the driver could not resolve it; using
/// it is then a silent no-op.
pub struct ShaderProgram<B: GraphicsBackend> {
    pub program: B::Program,
    pub vertex_position: Option<u32>,
    pub vertex_color: Option<u32>,
    pub projection_matrix: Option<B::UniformLocation>,
    pub model_view_matrix: Option<B::UniformLocation>,
}

/// One-shot builder: compile both stages, link, resolve bindings
pub struct ShaderPipelineBuilder<'a, B: GraphicsBackend> {
    backend: &'a B,
}

impl<'a, B: GraphicsBackend> ShaderPipelineBuilder<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    pub fn build(self, sources: ShaderSources<'_>) -> Result<ShaderProgram<B>, InitError> {
        let gl = self.backend;

        let vertex_shader = self.load_shader(ShaderStage::Vertex, sources.vertex)?;
        let fragment_shader = match self.load_shader(ShaderStage::Fragment, sources.fragment) {
            Ok(shader) => shader,
            Err(e) => {
                gl.delete_shader(&vertex_shader);
                return Err(e);
            }
        };

        let Some(program) = gl.create_program() else {
            gl.delete_shader(&vertex_shader);
            gl.delete_shader(&fragment_shader);
            return Err(InitError::ResourceCreation("shader program"));
        };

        gl.attach_shader(&program, &vertex_shader);
        gl.attach_shader(&program, &fragment_shader);
        let linked = gl.link_program(&program);

        // Attached shaders are only flagged; the program keeps them alive
        gl.delete_shader(&vertex_shader);
        gl.delete_shader(&fragment_shader);

        if let Err(log) = linked {
            gl.delete_program(&program);
            log::error!("shader link failed: {log}");
            return Err(InitError::ShaderLink { log });
        }

        let shader_program = ShaderProgram {
            vertex_position: gl.attrib_location(&program, ATTR_VERTEX_POSITION),
            vertex_color: gl.attrib_location(&program, ATTR_VERTEX_COLOR),
            projection_matrix: gl.uniform_location(&program, UNIFORM_PROJECTION_MATRIX),
            model_view_matrix: gl.uniform_location(&program, UNIFORM_MODEL_VIEW_MATRIX),
            program,
        };

        log::debug!(
            "bindings: {ATTR_VERTEX_POSITION}={:?} {ATTR_VERTEX_COLOR}={:?} \
             {UNIFORM_PROJECTION_MATRIX}={} {UNIFORM_MODEL_VIEW_MATRIX}={}",
            shader_program.vertex_position,
            shader_program.vertex_color,
            shader_program.projection_matrix.is_some(),
            shader_program.model_view_matrix.is_some(),
        );
        check_declarations(sources.vertex);

        Ok(shader_program)
    }

    fn load_shader(&self, stage: ShaderStage, source: &str) -> Result<B::Shader, InitError> {
        let gl = self.backend;
        let shader = gl
            .create_shader(stage)
            .ok_or(InitError::ResourceCreation("shader"))?;

        if let Err(log) = gl.compile_shader(&shader, source) {
            gl.delete_shader(&shader);
            log::error!("{stage} shader failed to compile: {log}");
            return Err(InitError::ShaderCompile { stage, log });
        }
        Ok(shader)
    }
}

/// Warns about bindings the vertex stage never declares; the driver would
/// hand back an inert location for them without complaint.
fn check_declarations(vertex_source: &str) -> Vec<&'static str> {
    let interface = match ShaderInterface::parse(vertex_source) {
        Ok(interface) => interface,
        Err(e) => {
            log::debug!("skipping shader reflection: {e}");
            return Vec::new();
        }
    };

    let mut missing = Vec::new();
    for name in [ATTR_VERTEX_POSITION, ATTR_VERTEX_COLOR] {
        if !interface.declares_attribute(name) {
            missing.push(name);
        }
    }
    for name in [UNIFORM_PROJECTION_MATRIX, UNIFORM_MODEL_VIEW_MATRIX] {
        if !interface.declares_uniform(name) {
            missing.push(name);
        }
    }
    for name in &missing {
        log::warn!("`{name}` is not declared by the vertex shader; it will be ignored");
    }
    missing
}
