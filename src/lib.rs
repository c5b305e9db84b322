//! Cuestream - scene action record inspection
//!
//! This library crate exposes the CLI's building blocks for integration testing.

pub mod config;
pub mod inspect;
pub mod placement;

pub use cuestream_format as format;
pub use cuestream_geometry as geometry;
