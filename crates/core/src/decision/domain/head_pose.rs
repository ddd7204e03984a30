use serde::Serialize;

/// Head rotation axis, in detector convention: X pitch, Y yaw, Z roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Corrective instruction for the user, as an opaque identifier.
///
/// The engine decides which single hint to surface per frame; mapping a
/// hint to a visual asset is the UI layer's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CorrectionHint {
    TurnLeft,
    TurnRight,
    TiltLeft,
    TiltRight,
    LookUp,
    LookDown,
}

/// Outcome of head-pose evaluation for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HeadPoseResult {
    /// All three axes are inside their acceptance bands.
    Correct,
    /// The first axis (in priority order) found outside its band, with
    /// the instruction that moves the user back toward it.
    OutOfRange { axis: Axis, hint: CorrectionHint },
}

impl HeadPoseResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, HeadPoseResult::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_is_valid() {
        assert!(HeadPoseResult::Correct.is_valid());
    }

    #[test]
    fn test_out_of_range_is_not_valid() {
        let result = HeadPoseResult::OutOfRange {
            axis: Axis::Y,
            hint: CorrectionHint::TurnLeft,
        };
        assert!(!result.is_valid());
    }
}
