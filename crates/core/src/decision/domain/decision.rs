use serde::Serialize;

use super::head_pose::HeadPoseResult;

/// Per-frame capture-readiness verdict.
///
/// `None` in a trait field means the detector supplied no probability for
/// that signal this frame; aggregation treats absence as failing, so
/// `requirements_met` can only be true when every signal was present and
/// passed. `pose` is `None` only when no face was visible.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Decision {
    pub visible: bool,
    pub neutral_expression: Option<bool>,
    pub left_eye_open: Option<bool>,
    pub right_eye_open: Option<bool>,
    pub pose: Option<HeadPoseResult>,
    pub requirements_met: bool,
}

impl Decision {
    /// Verdict for a frame with no detected face.
    pub fn not_visible() -> Self {
        Self {
            visible: false,
            neutral_expression: None,
            left_eye_open: None,
            right_eye_open: None,
            pose: None,
            requirements_met: false,
        }
    }
}
