//! Placement transforms derived from action records.

use cuestream_format::ActionRecord;
use cuestream_geometry::{FrameBuilder, Result, Transform3DF};

/// Whether the action carries placement vectors at all.
///
/// Actions without a placement store all-zero direction and up vectors.
pub fn has_placement(action: &ActionRecord) -> bool {
    action.direction.iter().chain(&action.up).any(|c| *c != 0.0)
}

/// Local-to-world transform for the action's location, direction and up.
///
/// The stored double-precision vectors are narrowed to single precision
/// before the frame is built.
pub fn placement_transform(action: &ActionRecord) -> Result<Transform3DF> {
    FrameBuilder::from_f64(action.location, action.direction, action.up).build()
}

/// Placement transform, or `None` if the action has no placement.
pub fn try_placement(action: &ActionRecord) -> Option<Result<Transform3DF>> {
    if !has_placement(action) {
        return None;
    }
    let result = placement_transform(action);
    if let Err(ref e) = result {
        tracing::warn!(object_id = action.object_id, error = %e, "invalid placement vectors");
    }
    Some(result)
}
