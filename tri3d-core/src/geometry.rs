/// Static vertex data for the colored triangle
use nalgebra::{Point2, Vector4};

/// Floats per position (x, y)
pub const POSITION_COMPONENTS: i32 = 2;
/// Floats per color (r, g, b, a)
pub const COLOR_COMPONENTS: i32 = 4;

/// A 2D vertex with an RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point2<f32>,
    pub color: Vector4<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            position: Point2::new(x, y),
            color: Vector4::new(r, g, b, a),
        }
    }
}

/// The single triangle drawn every frame
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Apex up, base along y = -1, one primary color per corner
    pub fn rgb() -> Self {
        Self::new(
            Vertex::new(0.0, 1.0, 1.0, 0.0, 0.0, 1.0),
            Vertex::new(-1.0, -1.0, 0.0, 1.0, 0.0, 1.0),
            Vertex::new(1.0, -1.0, 0.0, 0.0, 1.0, 1.0),
        )
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertices.len() as i32
    }

    /// Tightly packed x, y pairs
    pub fn position_data(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.position.x, v.position.y])
            .collect()
    }

    /// Tightly packed r, g, b, a quadruples
    pub fn color_data(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.color.x, v.color.y, v.color.z, v.color.w])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_layout() {
        let tri = Triangle::rgb();
        assert_eq!(
            tri.position_data(),
            vec![0.0, 1.0, -1.0, -1.0, 1.0, -1.0]
        );
        assert_eq!(
            tri.position_data().len(),
            (tri.vertex_count() * POSITION_COMPONENTS) as usize
        );
    }

    #[test]
    fn test_color_layout() {
        let tri = Triangle::rgb();
        let colors = tri.color_data();
        assert_eq!(colors.len(), (tri.vertex_count() * COLOR_COMPONENTS) as usize);
        assert_eq!(&colors[0..4], &[1.0, 0.0, 0.0, 1.0]);
        assert_eq!(&colors[4..8], &[0.0, 1.0, 0.0, 1.0]);
        assert_eq!(&colors[8..12], &[0.0, 0.0, 1.0, 1.0]);
    }
}
