use crate::shared::observation::Observation;

use super::domain::decision::Decision;
use super::domain::pose_evaluator::evaluate_pose;
use super::domain::result_sink::FaceResultSink;
use super::domain::trait_evaluator::{is_eye_open, is_neutral_expression};

/// Per-frame decision aggregator: observation in, capture-readiness out.
///
/// Holds no state across frames; the sink receives each sub-result as it
/// is computed and the aggregate verdict last. Evaluating the same
/// observation twice yields the same decision.
pub struct EvaluateFrameUseCase {
    sink: Box<dyn FaceResultSink>,
}

impl EvaluateFrameUseCase {
    pub fn new(sink: Box<dyn FaceResultSink>) -> Self {
        Self { sink }
    }

    /// Classifies one frame's signals and notifies the sink.
    ///
    /// With no face present only visibility is reported and no trait or
    /// pose evaluation runs. Otherwise each trait is evaluated
    /// only when its probability is present, head pose is reported exactly
    /// once, and `requirements_met` is the conjunction of all four checks
    /// with absent signals failing closed.
    pub fn execute(&mut self, observation: &Observation) -> Decision {
        if observation.face_count == 0 {
            self.sink.visibility(false);
            return Decision::not_visible();
        }

        self.sink.visibility(true);

        let neutral = observation.smile_probability.map(is_neutral_expression);
        if let Some(ok) = neutral {
            self.sink.expression(ok);
        }

        // The detector reports eyes in subject space while results are
        // surfaced in mirrored-preview space, so the sides swap here.
        let right_eye = observation.left_eye_open_probability.map(is_eye_open);
        if let Some(ok) = right_eye {
            self.sink.right_eye(ok);
        }
        let left_eye = observation.right_eye_open_probability.map(is_eye_open);
        if let Some(ok) = left_eye {
            self.sink.left_eye(ok);
        }

        let pose = evaluate_pose(
            observation.head_angle_x,
            observation.head_angle_y,
            observation.head_angle_z,
        );
        self.sink.head_pose(&pose);

        let requirements_met = neutral.unwrap_or(false)
            && pose.is_valid()
            && left_eye.unwrap_or(false)
            && right_eye.unwrap_or(false);
        self.sink.requirements_met(requirements_met);

        Decision {
            visible: true,
            neutral_expression: neutral,
            left_eye_open: left_eye,
            right_eye_open: right_eye,
            pose: Some(pose),
            requirements_met,
        }
    }
}
