use super::head_pose::{Axis, CorrectionHint, HeadPoseResult};

/// Acceptance band for one rotation axis, in degrees. Both bounds inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleBand {
    pub lower: f32,
    pub upper: f32,
}

impl AngleBand {
    pub const fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }
}

/// Classifies one rotation angle against its acceptance band.
///
/// `below` is the hint surfaced when the angle falls under the lower bound,
/// `above` when it exceeds the upper bound. Pure and total over all angles.
pub fn evaluate_axis(
    angle: f32,
    axis: Axis,
    band: AngleBand,
    below: CorrectionHint,
    above: CorrectionHint,
) -> HeadPoseResult {
    if angle < band.lower {
        HeadPoseResult::OutOfRange { axis, hint: below }
    } else if angle > band.upper {
        HeadPoseResult::OutOfRange { axis, hint: above }
    } else {
        HeadPoseResult::Correct
    }
}
