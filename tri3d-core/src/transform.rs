/// Model-view transform and the animation state that drives it
use nalgebra::{Matrix4, Unit, Vector3};

use crate::clock::FrameClock;

/// Rotation accumulated from frame deltas, plus the clock producing them.
///
/// `rotation` only ever grows; it is not wrapped to `[0, 2π)`.
#[derive(Debug, Clone, Default)]
pub struct AnimationState {
    pub rotation: f32,
    pub clock: FrameClock,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds at `speed` radians per second
    pub fn advance(&mut self, dt: f32, speed: f32) {
        self.rotation += (dt * speed).max(0.0);
    }
}

/// Transform builder for the model-view matrix
pub struct Transform;

impl Transform {
    /// identity, then translate, then rotate about `axis`
    pub fn model_view(translation: &Vector3<f32>, axis: &Vector3<f32>, angle: f32) -> Matrix4<f32> {
        Self::translation_matrix(translation) * Self::rotation_matrix(axis, angle)
    }

    pub fn translation_matrix(translation: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_translation(translation)
    }

    pub fn rotation_matrix(axis: &Vector3<f32>, angle: f32) -> Matrix4<f32> {
        Matrix4::from_axis_angle(&Unit::new_normalize(*axis), angle)
    }
}
