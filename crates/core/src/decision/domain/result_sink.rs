use super::head_pose::HeadPoseResult;

/// Consumer-supplied notification points for per-frame results.
///
/// Every method defaults to a no-op so implementers subscribe only to the
/// notifications they need. Trait evaluations are reported only for frames
/// where the detector computed the corresponding probability; visibility,
/// head pose, and readiness are reported per the aggregator's contract.
pub trait FaceResultSink: Send {
    /// Whether a face is visible this frame.
    fn visibility(&mut self, _visible: bool) {}

    /// Expression check result.
    fn expression(&mut self, _neutral: bool) {}

    /// Left-eye openness, in mirrored-preview space.
    fn left_eye(&mut self, _open: bool) {}

    /// Right-eye openness, in mirrored-preview space.
    fn right_eye(&mut self, _open: bool) {}

    /// The single head-pose verdict for this frame.
    fn head_pose(&mut self, _result: &HeadPoseResult) {}

    /// Aggregate capture-readiness, reported last.
    fn requirements_met(&mut self, _ready: bool) {}
}

/// Sink that discards every notification.
///
/// Used where only the returned `Decision` matters, and by tests.
pub struct NullResultSink;

impl FaceResultSink for NullResultSink {}
