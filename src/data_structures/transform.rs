//! Decomposed transforms for the studies.
//!
//! Position, rotation and scale are kept separate instead of as a raw 4x4
//! matrix. Rotating a body about its own axis then becomes an update of the
//! rotation component and trivially preserves the position, where the matrix
//! form would need an inverse-translate/rotate/translate sandwich.

use std::ops::Mul;

use cgmath::{Deg, One, Quaternion, Rotation3};

/// A translate/rotate/scale transform.
///
/// Composition via `Mul` follows the usual parent-times-child convention:
/// the child's position is scaled and rotated into the parent's frame before
/// the parent's own translation applies.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Quaternion<f32>,
    pub scale: cgmath::Vector3<f32>,
}

impl Transform {
    /// The identity transform: no move, rotate or scale.
    pub fn new() -> Self {
        Self {
            position: cgmath::Vector3::new(0.0, 0.0, 0.0),
            // `Quaternion::one()` is the identity quaternion (no rotation)
            rotation: cgmath::Quaternion::one(),
            scale: cgmath::Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn from_position(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: cgmath::Vector3::new(x, y, z),
            ..Self::new()
        }
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = cgmath::Vector3::new(scale, scale, scale);
        self
    }

    /// Rotate about the transform's own Y axis, keeping the position fixed.
    pub fn spin(&mut self, angle: Deg<f32>) {
        self.rotation = Quaternion::from_angle_y(angle) * self.rotation;
    }

    pub fn to_matrix(&self) -> cgmath::Matrix4<f32> {
        cgmath::Matrix4::from_translation(self.position)
            * cgmath::Matrix4::from(self.rotation)
            * cgmath::Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<cgmath::Vector3<f32>> for Transform {
    fn from(position: cgmath::Vector3<f32>) -> Self {
        Transform {
            position,
            ..Default::default()
        }
    }
}

impl Mul<Transform> for Transform {
    type Output = Self;

    fn mul(self, rhs: Transform) -> Self::Output {
        &self * &rhs
    }
}

impl<'a, 'b> Mul<&'b Transform> for &'a Transform {
    type Output = Transform;

    fn mul(self, rhs: &'b Transform) -> Self::Output {
        let new_rotation = self.rotation * rhs.rotation;

        let new_scale = cgmath::Vector3::new(
            self.scale.x * rhs.scale.x,
            self.scale.y * rhs.scale.y,
            self.scale.z * rhs.scale.z,
        );
        let scaled_rhs_pos = cgmath::Vector3::new(
            self.scale.x * rhs.position.x,
            self.scale.y * rhs.position.y,
            self.scale.z * rhs.position.z,
        );
        let new_position = self.position + (self.rotation * scaled_rhs_pos);

        Transform {
            position: new_position,
            rotation: new_rotation,
            scale: new_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{SquareMatrix, Vector3, Vector4};

    fn assert_vec3_eq(actual: Vector3<f32>, expected: Vector3<f32>) {
        let delta = actual - expected;
        assert!(
            delta.x.abs() < 1e-5 && delta.y.abs() < 1e-5 && delta.z.abs() < 1e-5,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn identity_matrix_for_default_transform() {
        assert_eq!(Transform::new().to_matrix(), cgmath::Matrix4::identity());
    }

    #[test]
    fn composition_scales_child_position_into_parent_frame() {
        let parent = Transform::from_position(1.0, 0.0, 0.0).with_uniform_scale(0.5);
        let child = Transform::from_position(2.0, 0.0, 0.0);

        let composed = &parent * &child;
        assert_vec3_eq(composed.position, Vector3::new(2.0, 0.0, 0.0));
        assert_vec3_eq(composed.scale, Vector3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn composition_rotates_child_position() {
        let mut parent = Transform::new();
        parent.rotation = Quaternion::from_angle_z(Deg(90.0));
        let child = Transform::from_position(1.0, 0.0, 0.0);

        let composed = &parent * &child;
        assert_vec3_eq(composed.position, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn spin_preserves_position() {
        let mut transform = Transform::from_position(3.0, -1.0, 0.5);
        transform.spin(Deg(37.0));
        assert_vec3_eq(transform.position, Vector3::new(3.0, -1.0, 0.5));
    }

    #[test]
    fn composition_matches_matrix_multiplication() {
        let mut parent = Transform::from_position(1.0, 2.0, 3.0).with_uniform_scale(2.0);
        parent.rotation = Quaternion::from_angle_y(Deg(45.0));
        let mut child = Transform::from_position(-0.5, 0.25, 0.0);
        child.rotation = Quaternion::from_angle_z(Deg(30.0));

        let composed = (&parent * &child).to_matrix();
        let multiplied = parent.to_matrix() * child.to_matrix();
        for col in 0..4 {
            let lhs: Vector4<f32> = composed[col];
            let rhs: Vector4<f32> = multiplied[col];
            let delta = lhs - rhs;
            for i in 0..4 {
                assert!(delta[i].abs() < 1e-4, "column {col} differs: {lhs:?} vs {rhs:?}");
            }
        }
    }
}
