//! 4x4 transforms.

use crate::vector::{Vector3F, Vector4F};
use std::ops::Mul;

/// A 4x4 transform.
///
/// In column-major order: `c0`..`c2` hold the basis axes and `c3` the
/// translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3DF {
    pub c0: Vector4F,
    pub c1: Vector4F,
    pub c2: Vector4F,
    pub c3: Vector4F,
}

impl Default for Transform3DF {
    #[inline]
    fn default() -> Transform3DF {
        Transform3DF {
            c0: Vector4F::new(1.0, 0.0, 0.0, 0.0),
            c1: Vector4F::new(0.0, 1.0, 0.0, 0.0),
            c2: Vector4F::new(0.0, 0.0, 1.0, 0.0),
            c3: Vector4F::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}

impl Transform3DF {
    #[inline]
    pub fn identity() -> Transform3DF {
        Transform3DF::default()
    }

    #[inline]
    pub fn from_columns(c0: Vector4F, c1: Vector4F, c2: Vector4F, c3: Vector4F) -> Transform3DF {
        Transform3DF { c0, c1, c2, c3 }
    }

    /// Build from rows, `rows[r][c]` being row `r`, column `c`.
    pub fn row_major(rows: [[f32; 4]; 4]) -> Transform3DF {
        let column = |c: usize| Vector4F::new(rows[0][c], rows[1][c], rows[2][c], rows[3][c]);
        Transform3DF::from_columns(column(0), column(1), column(2), column(3))
    }

    #[inline]
    pub fn from_translation(x: f32, y: f32, z: f32) -> Transform3DF {
        Transform3DF {
            c3: Vector4F::new(x, y, z, 1.0),
            ..Transform3DF::default()
        }
    }

    #[inline]
    pub fn to_columns(&self) -> [Vector4F; 4] {
        [self.c0, self.c1, self.c2, self.c3]
    }

    /// Column `index` (0..4).
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn column(&self, index: usize) -> Vector4F {
        self.to_columns()[index]
    }

    /// Flat column-major element array.
    pub fn to_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (i, column) in self.to_columns().iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(&column.to_array());
        }
        out
    }

    /// Rows, `rows[r][c]` being row `r`, column `c`.
    pub fn to_rows(&self) -> [[f32; 4]; 4] {
        let columns = self.to_columns().map(Vector4F::to_array);
        let mut rows = [[0.0; 4]; 4];
        for (c, column) in columns.iter().enumerate() {
            for (r, value) in column.iter().enumerate() {
                rows[r][c] = *value;
            }
        }
        rows
    }

    #[inline]
    pub fn translation(&self) -> Vector3F {
        self.c3.to_3d()
    }

    #[inline]
    pub fn transform_point(&self, point: Vector4F) -> Vector4F {
        self.c0 * point.x + self.c1 * point.y + self.c2 * point.z + self.c3 * point.w
    }

    #[inline]
    pub fn transform_point3(&self, point: Vector3F) -> Vector3F {
        self.transform_point(point.to_4d(1.0)).to_3d()
    }

    /// `self * other`: apply `other` first, then `self`.
    pub fn post_mul(&self, other: &Transform3DF) -> Transform3DF {
        Transform3DF::from_columns(
            self.transform_point(other.c0),
            self.transform_point(other.c1),
            self.transform_point(other.c2),
            self.transform_point(other.c3),
        )
    }

    pub fn approx_eq(&self, other: &Transform3DF, epsilon: f32) -> bool {
        self.c0.approx_eq(other.c0, epsilon)
            && self.c1.approx_eq(other.c1, epsilon)
            && self.c2.approx_eq(other.c2, epsilon)
            && self.c3.approx_eq(other.c3, epsilon)
    }

    /// Bitwise equality, distinguishing `-0.0` from `0.0`.
    pub fn bit_eq(&self, other: &Transform3DF) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Mul<Transform3DF> for Transform3DF {
    type Output = Transform3DF;
    #[inline]
    fn mul(self, other: Transform3DF) -> Transform3DF {
        self.post_mul(&other)
    }
}
