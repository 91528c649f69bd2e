/// Static vertex buffers for the triangle
use crate::backend::GraphicsBackend;
use crate::error::InitError;
use crate::geometry::Triangle;

/// GPU-resident position and color buffers, uploaded once
pub struct GeometryBuffers<B: GraphicsBackend> {
    pub position: B::Buffer,
    pub color: B::Buffer,
    pub vertex_count: i32,
}

pub struct GeometryBufferStore;

impl GeometryBufferStore {
    pub fn upload<B: GraphicsBackend>(
        backend: &B,
        triangle: &Triangle,
    ) -> Result<GeometryBuffers<B>, InitError> {
        let position = backend
            .create_static_buffer(&triangle.position_data())
            .ok_or(InitError::ResourceCreation("position buffer"))?;
        let color = backend
            .create_static_buffer(&triangle.color_data())
            .ok_or(InitError::ResourceCreation("color buffer"))?;

        Ok(GeometryBuffers {
            position,
            color,
            vertex_count: triangle.vertex_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Call, RecordingBackend};

    #[test]
    fn test_uploads_positions_then_colors() {
        let backend = RecordingBackend::new();
        let buffers = GeometryBufferStore::upload(&backend, &Triangle::rgb()).unwrap();

        assert_eq!(buffers.vertex_count, 3);
        assert_ne!(buffers.position, buffers.color);
        let calls = backend.take_calls();
        assert_eq!(
            calls[0],
            Call::CreateBuffer(buffers.position, vec![0.0, 1.0, -1.0, -1.0, 1.0, -1.0])
        );
        assert!(matches!(&calls[1], Call::CreateBuffer(id, data) if *id == buffers.color && data.len() == 12));
    }

    #[test]
    fn test_buffer_creation_failure() {
        let backend = RecordingBackend::refusing_buffers();
        let err = GeometryBufferStore::upload(&backend, &Triangle::rgb()).err().unwrap();
        assert!(matches!(err, InitError::ResourceCreation("position buffer")));
    }
}
