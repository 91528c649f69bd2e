/// Perspective projection for the fixed camera
use nalgebra::Matrix4;

use crate::config::AppConfig;

/// Perspective parameters. The aspect ratio comes from the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn from_config(config: &AppConfig, width: u32, height: u32) -> Self {
        Self {
            fov: config.fov,
            aspect: aspect_ratio(width, height),
            near: config.near,
            far: config.far,
        }
    }

    /// Column-major, right-handed, clip z in [-1, 1]
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }
}

/// Width over height. A collapsed dimension counts as one pixel so the
/// projection stays finite.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutorial(width: u32, height: u32) -> Projection {
        Projection::from_config(&AppConfig::default(), width, height)
    }

    #[test]
    fn test_projection_creation() {
        let projection = tutorial(800, 600);
        assert!((projection.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert!((projection.fov - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_matrix_terms() {
        let m = tutorial(640, 480).matrix();
        let f = 1.0 / (std::f32::consts::FRAC_PI_4 / 2.0).tan();
        assert!((m[(0, 0)] - f / (640.0 / 480.0)).abs() < 1e-5);
        assert!((m[(1, 1)] - f).abs() < 1e-5);
        assert!((m[(2, 2)] - (100.1 / -99.9)).abs() < 1e-5);
        assert!((m[(3, 2)] + 1.0).abs() < 1e-6);
        assert!((m[(2, 3)] - (2.0 * 100.0 * 0.1 / -99.9)).abs() < 1e-5);
    }

    #[test]
    fn test_zero_height_is_finite() {
        let m = tutorial(300, 0).matrix();
        assert!(m.iter().all(|v| v.is_finite()));
        let m = tutorial(0, 0).matrix();
        assert!(m.iter().all(|v| v.is_finite()));
    }
}
