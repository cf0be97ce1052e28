//! Rigid transform layer
//!
//! Every generated point is rotated about a configurable center before it is
//! emitted. Rotation comes from Euler angles in degrees, composed in
//! intrinsic X-Y-Z order.

use glam::{EulerRot, Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// Placement of a generated shape: the point it is built around and the
/// rotation applied about that point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Point the shape is generated around and rotated about
    pub center: Vec3,
    /// Euler angles in degrees, applied intrinsic X, then Y, then Z
    pub rotation_deg: Vec3,
}

impl Transform {
    pub fn new(center: Vec3, rotation_deg: Vec3) -> Self {
        Self {
            center,
            rotation_deg,
        }
    }

    /// Rotate `p` about `self.center` by the configured Euler angles.
    pub fn apply(&self, p: Vec3) -> Vec3 {
        rotate_point(p, self.center, self.rotation_deg)
    }
}

/// Compute `center + R(euler) * (p - center)`, with `R` built from degrees in
/// intrinsic X-Y-Z order.
///
/// A rotation about Z only reduces to the classic 2D rotation in the XY
/// plane, which earlier rotation-only wireframe code relied on.
pub fn rotate_point(p: Vec3, center: Vec3, rotation_deg: Vec3) -> Vec3 {
    let rotation = Mat3::from_euler(
        EulerRot::XYZ,
        rotation_deg.x.to_radians(),
        rotation_deg.y.to_radians(),
        rotation_deg.z.to_radians(),
    );
    center + rotation * (p - center)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert!(
            (a - b).abs().max_element() < EPS,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let p = Vec3::new(1.5, -2.0, 3.25);
        let center = Vec3::new(0.5, 0.5, 0.5);
        assert_vec3_eq(rotate_point(p, center, Vec3::ZERO), p);
    }

    /// Pure Z rotation must match the classic 2D rotation about the Z axis.
    #[test]
    fn test_z_rotation_matches_2d_reference() {
        let p = Vec3::new(2.0, 1.0, -3.0);
        let angle = 37.0f32;
        let (sin, cos) = angle.to_radians().sin_cos();

        let expected = Vec3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z);
        let rotated = rotate_point(p, Vec3::ZERO, Vec3::new(0.0, 0.0, angle));
        assert_vec3_eq(rotated, expected);
    }

    #[test]
    fn test_x_rotation_quarter_turn() {
        // Rx(90°) maps +Y to +Z in a right-handed frame
        let rotation = Vec3::new(90.0, 0.0, 0.0);
        assert_vec3_eq(rotate_point(Vec3::Y, Vec3::ZERO, rotation), Vec3::Z);
    }

    #[test]
    fn test_rotation_is_about_center() {
        // The center itself never moves, and points rotate around it rather
        // than around the origin
        let center = Vec3::new(10.0, 0.0, 0.0);
        let rotation = Vec3::new(0.0, 0.0, 90.0);

        assert_vec3_eq(rotate_point(center, center, rotation), center);

        let p = center + Vec3::X;
        assert_vec3_eq(rotate_point(p, center, rotation), center + Vec3::Y);
    }

    #[test]
    fn test_transform_apply_matches_free_function() {
        let transform = Transform::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(10.0, 20.0, 30.0));
        let p = Vec3::new(-4.0, 5.0, 0.25);
        assert_vec3_eq(
            transform.apply(p),
            rotate_point(p, transform.center, transform.rotation_deg),
        );
    }
}
