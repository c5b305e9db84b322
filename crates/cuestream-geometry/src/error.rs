//! Error types for cuestream-geometry.

use std::fmt;
use thiserror::Error;

/// Result type for frame construction.
pub type Result<T> = std::result::Result<T, FrameError>;

/// Vector taking part in frame construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Position,
    Direction,
    Up,
    /// Right axis, derived from up and direction.
    X,
    /// Re-derived up axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Position => "position",
            Self::Direction => "direction",
            Self::Up => "up",
            Self::X => "x axis",
            Self::Y => "y axis",
        };
        f.write_str(name)
    }
}

/// Frame construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrameError {
    /// An input component is NaN or infinite.
    #[error("Non-finite {0} vector")]
    NonFinite(Axis),

    /// A vector is too short (or too long) to normalize.
    #[error("Degenerate {axis} vector (length {length})")]
    Degenerate { axis: Axis, length: f64 },
}

impl FrameError {
    /// Vector that caused the failure.
    pub fn axis(&self) -> Axis {
        match self {
            Self::NonFinite(axis) => *axis,
            Self::Degenerate { axis, .. } => *axis,
        }
    }
}
