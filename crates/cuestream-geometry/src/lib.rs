//! Cuestream-Geometry: placement math for action records
//!
//! Small value types for 3D vectors and 4x4 transforms, and the
//! [`FrameBuilder`] that turns a position, a facing direction and an up
//! vector into a local-to-world transform.
//!
//! The frame construction follows a fixed sequence of single-precision
//! operations so its output is reproducible bit for bit; see
//! [`frame`] for the exact order.

pub mod error;
pub mod frame;
pub mod transform;
pub mod vector;

pub use error::{Axis, FrameError, Result};
pub use frame::{FrameBuilder, DEGENERATE_EPSILON};
pub use transform::Transform3DF;
pub use vector::{Vector3F, Vector4F};
