//! Single-precision vector types.

use std::ops::{Add, Mul, Neg, Sub};

/// 3D vector with 32-bit floating point components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3F {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3F {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Vector3F {
        Vector3F { x, y, z }
    }

    #[inline]
    pub fn splat(value: f32) -> Vector3F {
        Vector3F::new(value, value, value)
    }

    #[inline]
    pub fn zero() -> Vector3F {
        Vector3F::default()
    }

    /// Narrow double-precision components, rounding to nearest.
    #[inline]
    pub fn from_f64(v: [f64; 3]) -> Vector3F {
        Vector3F::new(v[0] as f32, v[1] as f32, v[2] as f32)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(v: [f32; 3]) -> Vector3F {
        Vector3F::new(v[0], v[1], v[2])
    }

    /// Extend with a homogeneous coordinate.
    #[inline]
    pub fn to_4d(self, w: f32) -> Vector4F {
        Vector4F::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn dot(self, other: Vector3F) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self x other`.
    #[inline]
    pub fn cross(self, other: Vector3F) -> Vector3F {
        Vector3F::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn square_length(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.square_length().sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn approx_eq(self, other: Vector3F, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl Add<Vector3F> for Vector3F {
    type Output = Vector3F;
    #[inline]
    fn add(self, other: Vector3F) -> Vector3F {
        Vector3F::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub<Vector3F> for Vector3F {
    type Output = Vector3F;
    #[inline]
    fn sub(self, other: Vector3F) -> Vector3F {
        Vector3F::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Vector3F {
    type Output = Vector3F;
    #[inline]
    fn mul(self, factor: f32) -> Vector3F {
        Vector3F::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl Neg for Vector3F {
    type Output = Vector3F;
    #[inline]
    fn neg(self) -> Vector3F {
        Vector3F::new(-self.x, -self.y, -self.z)
    }
}

/// 4D vector with 32-bit floating point components, used for transform
/// columns and homogeneous points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector4F {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4F {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Vector4F {
        Vector4F { x, y, z, w }
    }

    #[inline]
    pub fn to_3d(self) -> Vector3F {
        Vector3F::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn approx_eq(self, other: Vector4F, epsilon: f32) -> bool {
        self.to_3d().approx_eq(other.to_3d(), epsilon) && (self.w - other.w).abs() <= epsilon
    }
}

impl Add<Vector4F> for Vector4F {
    type Output = Vector4F;
    #[inline]
    fn add(self, other: Vector4F) -> Vector4F {
        Vector4F::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl Mul<f32> for Vector4F {
    type Output = Vector4F;
    #[inline]
    fn mul(self, factor: f32) -> Vector4F {
        Vector4F::new(
            self.x * factor,
            self.y * factor,
            self.z * factor,
            self.w * factor,
        )
    }
}
