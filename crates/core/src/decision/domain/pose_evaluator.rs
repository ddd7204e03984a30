use super::axis_evaluator::{evaluate_axis, AngleBand};
use super::head_pose::{Axis, CorrectionHint, HeadPoseResult};

/// Yaw acceptance band (degrees).
pub const YAW_BAND: AngleBand = AngleBand::new(-3.5, 3.5);

/// Pitch acceptance band. Asymmetric: the capture flow tolerates more
/// downward pitch than upward.
pub const PITCH_BAND: AngleBand = AngleBand::new(-5.5, 3.5);

/// Roll acceptance band (degrees).
pub const ROLL_BAND: AngleBand = AngleBand::new(-2.5, 2.5);

/// Evaluates head rotation with fixed axis priority Y → X → Z.
///
/// Stops at the first out-of-range axis, so at most one corrective hint
/// is surfaced per frame even when several axes are simultaneously off.
/// Hints point opposite the violation: a head turned past the lower yaw
/// bound is told to turn right.
pub fn evaluate_pose(x: f32, y: f32, z: f32) -> HeadPoseResult {
    let yaw = evaluate_axis(
        y,
        Axis::Y,
        YAW_BAND,
        CorrectionHint::TurnRight,
        CorrectionHint::TurnLeft,
    );
    if !yaw.is_valid() {
        return yaw;
    }

    let pitch = evaluate_axis(
        x,
        Axis::X,
        PITCH_BAND,
        CorrectionHint::LookUp,
        CorrectionHint::LookDown,
    );
    if !pitch.is_valid() {
        return pitch;
    }

    evaluate_axis(
        z,
        Axis::Z,
        ROLL_BAND,
        CorrectionHint::TiltRight,
        CorrectionHint::TiltLeft,
    )
}
