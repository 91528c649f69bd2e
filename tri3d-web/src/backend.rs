/// WebGL2 implementation of the graphics backend
use js_sys::Float32Array;
use nalgebra::{Matrix4, Vector4};
use tri3d_core::{GraphicsBackend, ShaderStage};
use web_sys::{WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation};

/// Thin wrapper forwarding every call to the browser's context
pub struct WebGlBackend {
    gl: GL,
}

impl WebGlBackend {
    pub fn new(gl: GL) -> Self {
        Self { gl }
    }
}

impl GraphicsBackend for WebGlBackend {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        let kind = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        self.gl.create_shader(kind)
    }

    fn compile_shader(&self, shader: &WebGlShader, source: &str) -> Result<(), String> {
        self.gl.shader_source(shader, source);
        self.gl.compile_shader(shader);

        if self
            .gl
            .get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            Ok(())
        } else {
            Err(self
                .gl
                .get_shader_info_log(shader)
                .unwrap_or_else(|| "unknown error creating shader".to_string()))
        }
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        self.gl.delete_shader(Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        self.gl.create_program()
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        self.gl.attach_shader(program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) -> Result<(), String> {
        self.gl.link_program(program);

        if self
            .gl
            .get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            Ok(())
        } else {
            Err(self
                .gl
                .get_program_info_log(program)
                .unwrap_or_else(|| "unknown error creating program".to_string()))
        }
    }

    fn delete_program(&self, program: &WebGlProgram) {
        self.gl.delete_program(Some(program));
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        // -1 means the attribute is not active
        u32::try_from(self.gl.get_attrib_location(program, name)).ok()
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn create_static_buffer(&self, data: &[f32]) -> Option<WebGlBuffer> {
        let buffer = self.gl.create_buffer()?;
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let array = Float32Array::from(data);
        self.gl
            .buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
        Some(buffer)
    }

    fn clear(&self, color: &Vector4<f32>, depth: f32) {
        self.gl.clear_color(color.x, color.y, color.z, color.w);
        self.gl.clear_depth(depth);
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn enable_depth_test(&self) {
        self.gl.enable(GL::DEPTH_TEST);
        self.gl.depth_func(GL::LEQUAL);
    }

    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.gl.viewport(x, y, width, height);
    }

    fn bind_vertex_attribute(&self, buffer: &WebGlBuffer, location: Option<u32>, components: i32) {
        let Some(location) = location else {
            return;
        };
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
        self.gl
            .vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, 0, 0);
        self.gl.enable_vertex_attrib_array(location);
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn uniform_matrix4(&self, location: Option<&WebGlUniformLocation>, matrix: &Matrix4<f32>) {
        self.gl
            .uniform_matrix4fv_with_f32_array(location, false, matrix.as_slice());
    }

    fn draw_triangle_strip(&self, first: i32, count: i32) {
        self.gl.draw_arrays(GL::TRIANGLE_STRIP, first, count);
    }
}
