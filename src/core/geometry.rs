//! Points, vectors, surface normals, and rays, together with the free
//! functions that combine them. Directions are plain `Vector3f`s kept at
//! unit length by construction; `Normal3f` marks vectors that behave as
//! surface normals.

// crate
use std::ops;

use crate::core::pbrt::Float;

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point2f {
    pub x: Float,
    pub y: Float,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Vector3f { x, y, z }
    }
    pub fn unit_x() -> Self {
        Vector3f::new(1.0, 0.0, 0.0)
    }
    pub fn unit_y() -> Self {
        Vector3f::new(0.0, 1.0, 0.0)
    }
    pub fn unit_z() -> Self {
        Vector3f::new(0.0, 0.0, 1.0)
    }
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    /// Unit-length copy of this vector. A (near-)zero vector has no
    /// direction; it normalizes to the canonical +z axis.
    pub fn normalize(&self) -> Vector3f {
        let len = self.length();
        if len > 0.0 as Float {
            Vector3f::new(self.x / len, self.y / len, self.z / len)
        } else {
            Vector3f::unit_z()
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Point3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Point3f { x, y, z }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Normal3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Normal3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Normal3f { x, y, z }
    }
}

impl From<Vector3f> for Normal3f {
    fn from(v: Vector3f) -> Self {
        Normal3f {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Normal3f> for Vector3f {
    fn from(n: Normal3f) -> Self {
        Vector3f {
            x: n.x,
            y: n.y,
            z: n.z,
        }
    }
}

impl std::ops::Neg for Vector3f {
    type Output = Vector3f;
    fn neg(self) -> Vector3f {
        Vector3f::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Neg for &Vector3f {
    type Output = Vector3f;
    fn neg(self) -> Vector3f {
        Vector3f::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Neg for Normal3f {
    type Output = Normal3f;
    fn neg(self) -> Normal3f {
        Normal3f::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Neg for &Normal3f {
    type Output = Normal3f;
    fn neg(self) -> Normal3f {
        Normal3f::new(-self.x, -self.y, -self.z)
    }
}

impl_op_ex!(+|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f::new(a.x + b.x, a.y + b.y, a.z + b.z)
});
impl_op_ex!(-|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f::new(a.x - b.x, a.y - b.y, a.z - b.z)
});
impl_op_ex_commutative!(*|a: &Vector3f, b: Float| -> Vector3f {
    Vector3f::new(a.x * b, a.y * b, a.z * b)
});
impl_op_ex!(/|a: &Vector3f, b: Float| -> Vector3f {
    Vector3f::new(a.x / b, a.y / b, a.z / b)
});
impl_op_ex!(+=|a: &mut Vector3f, b: &Vector3f| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});
impl_op_ex!(+|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f::new(a.x + b.x, a.y + b.y, a.z + b.z)
});
impl_op_ex!(-|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f::new(a.x - b.x, a.y - b.y, a.z - b.z)
});
impl_op_ex!(-|a: &Point3f, b: &Point3f| -> Vector3f {
    Vector3f::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

pub fn vec3_dot_vec3f(a: &Vector3f, b: &Vector3f) -> Float {
    a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn vec3_dot_nrmf(a: &Vector3f, b: &Normal3f) -> Float {
    a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn nrm_dot_vec3f(a: &Normal3f, b: &Vector3f) -> Float {
    a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn vec3_cross_vec3(a: &Vector3f, b: &Vector3f) -> Vector3f {
    Vector3f::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

pub fn nrm_cross_vec3(a: &Normal3f, b: &Vector3f) -> Vector3f {
    vec3_cross_vec3(&Vector3f::from(*a), b)
}

/// Build an orthonormal basis completing *v1*; *v1* must be normalized.
pub fn vec3_coordinate_system(v1: &Vector3f, v2: &mut Vector3f, v3: &mut Vector3f) {
    if v1.x.abs() > v1.y.abs() {
        *v2 = Vector3f::new(-v1.z, 0.0, v1.x) / (v1.x * v1.x + v1.z * v1.z).sqrt();
    } else {
        *v2 = Vector3f::new(0.0, v1.z, -v1.y) / (v1.y * v1.y + v1.z * v1.z).sqrt();
    }
    *v3 = vec3_cross_vec3(v1, v2);
}

/// Orthonormal shading frame around a normal *n* with tangent *t*; the
/// bitangent is `n x t`. Callers must pass a tangent perpendicular to
/// the normal.
#[derive(Debug, Copy, Clone)]
pub struct ShadingFrame {
    pub s: Vector3f,
    pub t: Vector3f,
    pub n: Vector3f,
}

impl ShadingFrame {
    pub fn new(n: &Normal3f, t: &Vector3f) -> Self {
        let n = Vector3f::from(*n);
        ShadingFrame {
            s: *t,
            t: vec3_cross_vec3(&n, t),
            n,
        }
    }
    pub fn local_to_world(&self, v: &Vector3f) -> Vector3f {
        self.s * v.x + self.t * v.y + self.n * v.z
    }
    pub fn world_to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(
            vec3_dot_vec3f(v, &self.s),
            vec3_dot_vec3f(v, &self.t),
            vec3_dot_vec3f(v, &self.n),
        )
    }
}

/// Ray with a unit direction and the cached component-wise inverse of
/// that direction for slab tests. The inverse is refreshed whenever the
/// direction changes.
#[derive(Debug, Copy, Clone)]
pub struct Ray {
    pub o: Point3f,
    pub d: Vector3f,
    d_inv: Vector3f,
}

impl Ray {
    pub fn new(o: Point3f, d: Vector3f) -> Self {
        let d = d.normalize();
        Ray {
            o,
            d,
            d_inv: Vector3f::new(1.0 / d.x, 1.0 / d.y, 1.0 / d.z),
        }
    }
    /// Ray from *o* through *target*.
    pub fn from_to(o: Point3f, target: Point3f) -> Self {
        Ray::new(o, target - o)
    }
    pub fn position(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }
    pub fn inv_direction(&self) -> &Vector3f {
        &self.d_inv
    }
    pub fn set_origin(&mut self, o: Point3f) {
        self.o = o;
    }
    pub fn set_direction(&mut self, d: Vector3f) {
        let d = d.normalize();
        self.d = d;
        self.d_inv = Vector3f::new(1.0 / d.x, 1.0 / d.y, 1.0 / d.z);
    }
}
