//! Rigid transforms for scene-object poses: a quaternion rotation
//! followed by a translation, cached as a row-major 4x4 matrix.

// crate
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::pbrt::Float;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quaternion {
    pub v: Vector3f,
    pub w: Float,
}

impl Quaternion {
    pub fn identity() -> Self {
        Quaternion {
            v: Vector3f::default(),
            w: 1.0,
        }
    }
    /// Rotation of *theta* radians about the (normalized) *axis*.
    pub fn from_axis_angle(axis: &Vector3f, theta: Float) -> Self {
        let axis = axis.normalize();
        let half = theta * 0.5;
        Quaternion {
            v: axis * half.sin(),
            w: half.cos(),
        }
    }
    pub fn rotate_x(theta: Float) -> Self {
        Quaternion::from_axis_angle(&Vector3f::unit_x(), theta)
    }
    pub fn rotate_y(theta: Float) -> Self {
        Quaternion::from_axis_angle(&Vector3f::unit_y(), theta)
    }
    pub fn rotate_z(theta: Float) -> Self {
        Quaternion::from_axis_angle(&Vector3f::unit_z(), theta)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::identity()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4 {
    pub m: [[Float; 4]; 4],
}

impl Matrix4x4 {
    pub fn identity() -> Self {
        Matrix4x4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
    /// World matrix of a pose: rotate by *q*, then translate by *delta*.
    pub fn translate_rotate(delta: &Vector3f, q: &Quaternion) -> Self {
        let (x, y, z, w) = (q.v.x, q.v.y, q.v.z, q.w);
        Matrix4x4 {
            m: [
                [
                    1.0 - 2.0 * (y * y + z * z),
                    2.0 * (x * y - w * z),
                    2.0 * (x * z + w * y),
                    delta.x,
                ],
                [
                    2.0 * (x * y + w * z),
                    1.0 - 2.0 * (x * x + z * z),
                    2.0 * (y * z - w * x),
                    delta.y,
                ],
                [
                    2.0 * (x * z - w * y),
                    2.0 * (y * z + w * x),
                    1.0 - 2.0 * (x * x + y * y),
                    delta.z,
                ],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let m = &self.m;
        Point3f::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3],
            m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3],
            m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3],
        )
    }
    pub fn transform_vector(&self, v: &Vector3f) -> Vector3f {
        let m = &self.m;
        Vector3f::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4::identity()
    }
}
