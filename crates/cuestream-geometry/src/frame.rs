//! Orthonormal frame construction.
//!
//! [`FrameBuilder::build`] turns a position, a facing direction and an up
//! vector into a local-to-world transform:
//!
//! 1. `z = normalize(direction)`
//! 2. `y = normalize(up)`
//! 3. `x = y x z`
//! 4. `x = normalize(x)`
//! 5. `y = z x x`
//! 6. `y = normalize(y)`
//! 7. columns `(x, 0)`, `(y, 0)`, `(z, 0)`, `(position, 1)`
//!
//! The first `y` only serves to derive `x`; the final `y` is recomputed from
//! the orthogonalized `x` and `z`.
//!
//! The order of operations is part of the output contract. Squares and their
//! sum are single precision, summed in the component order noted at each
//! step; the square root and the divisions run in double precision and each
//! quotient is rounded back to single precision. Reordering any of this
//! changes low bits of the result.

use crate::error::{Axis, FrameError, Result};
use crate::transform::Transform3DF;
use crate::vector::Vector3F;

/// Lengths at or below this are rejected as degenerate.
pub const DEGENERATE_EPSILON: f64 = f32::EPSILON as f64;

/// Order in which squared components are summed.
#[derive(Clone, Copy)]
enum SumOrder {
    Xyz,
    Xzy,
}

/// Divide each component by the vector's length.
fn normalize(v: Vector3F, order: SumOrder, axis: Axis) -> Result<Vector3F> {
    let (xx, yy, zz) = (v.x * v.x, v.y * v.y, v.z * v.z);
    let sum = match order {
        SumOrder::Xyz => xx + yy + zz,
        SumOrder::Xzy => xx + zz + yy,
    };
    let length = f64::from(sum).sqrt();

    if !length.is_finite() || length <= DEGENERATE_EPSILON {
        tracing::trace!(%axis, length, "rejecting degenerate frame vector");
        return Err(FrameError::Degenerate { axis, length });
    }

    Ok(Vector3F::new(
        (f64::from(v.x) / length) as f32,
        (f64::from(v.y) / length) as f32,
        (f64::from(v.z) / length) as f32,
    ))
}

/// Builds a local-to-world transform from placement vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameBuilder {
    position: Vector3F,
    direction: Vector3F,
    up: Vector3F,
}

impl FrameBuilder {
    pub fn new(position: Vector3F, direction: Vector3F, up: Vector3F) -> Self {
        Self {
            position,
            direction,
            up,
        }
    }

    /// Builder for double-precision placement vectors, narrowed to `f32`.
    pub fn from_f64(position: [f64; 3], direction: [f64; 3], up: [f64; 3]) -> Self {
        Self::new(
            Vector3F::from_f64(position),
            Vector3F::from_f64(direction),
            Vector3F::from_f64(up),
        )
    }

    /// Compute the transform.
    ///
    /// Fails if any input is non-finite, if `direction` or `up` is too
    /// short, or if they are parallel (the derived axes vanish).
    pub fn build(&self) -> Result<Transform3DF> {
        for (v, axis) in [
            (self.position, Axis::Position),
            (self.direction, Axis::Direction),
            (self.up, Axis::Up),
        ] {
            if !v.is_finite() {
                return Err(FrameError::NonFinite(axis));
            }
        }

        let z_axis = normalize(self.direction, SumOrder::Xyz, Axis::Direction)?;
        let y_axis = normalize(self.up, SumOrder::Xyz, Axis::Up)?;

        let x_axis = y_axis.cross(z_axis);
        let x_axis = normalize(x_axis, SumOrder::Xzy, Axis::X)?;

        let y_axis = z_axis.cross(x_axis);
        let y_axis = normalize(y_axis, SumOrder::Xzy, Axis::Y)?;

        Ok(Transform3DF::from_columns(
            x_axis.to_4d(0.0),
            y_axis.to_4d(0.0),
            z_axis.to_4d(0.0),
            self.position.to_4d(1.0),
        ))
    }
}
