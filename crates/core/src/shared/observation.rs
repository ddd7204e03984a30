use serde::Deserialize;

/// One frame's extracted detector signals.
///
/// Constructed fresh per processed video frame by the external face
/// detector; the engine never retains it past a single evaluation.
/// Probabilities, when present, are expected to lie in [0,1]; this is an
/// accepted precondition of the upstream detector, not guarded here.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Observation {
    /// Number of faces the detector reported. 0 means no face this frame.
    pub face_count: u32,

    /// Smiling probability, when the detector computed classification.
    #[serde(default)]
    pub smile_probability: Option<f32>,

    /// Left-eye open probability, in the detector's subject-space convention.
    #[serde(default)]
    pub left_eye_open_probability: Option<f32>,

    /// Right-eye open probability, in the detector's subject-space convention.
    #[serde(default)]
    pub right_eye_open_probability: Option<f32>,

    /// Head pitch in degrees.
    #[serde(default)]
    pub head_angle_x: f32,

    /// Head yaw in degrees.
    #[serde(default)]
    pub head_angle_y: f32,

    /// Head roll in degrees.
    #[serde(default)]
    pub head_angle_z: f32,
}

impl Observation {
    /// Observation for a frame where the detector found no face.
    pub fn no_face() -> Self {
        Self {
            face_count: 0,
            smile_probability: None,
            left_eye_open_probability: None,
            right_eye_open_probability: None,
            head_angle_x: 0.0,
            head_angle_y: 0.0,
            head_angle_z: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_face_has_no_signals() {
        let obs = Observation::no_face();
        assert_eq!(obs.face_count, 0);
        assert!(obs.smile_probability.is_none());
        assert!(obs.left_eye_open_probability.is_none());
        assert!(obs.right_eye_open_probability.is_none());
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let obs: Observation =
            serde_json::from_str(r#"{"face_count":1,"head_angle_y":2.0}"#).unwrap();
        assert_eq!(obs.face_count, 1);
        assert!(obs.smile_probability.is_none());
        assert!(obs.left_eye_open_probability.is_none());
        assert_relative_eq!(obs.head_angle_y, 2.0);
        assert_relative_eq!(obs.head_angle_x, 0.0);
    }

    #[test]
    fn test_deserialize_full_record() {
        let obs: Observation = serde_json::from_str(
            r#"{"face_count":1,"smile_probability":0.1,
                "left_eye_open_probability":0.9,"right_eye_open_probability":0.8,
                "head_angle_x":-1.0,"head_angle_y":0.5,"head_angle_z":0.25}"#,
        )
        .unwrap();
        assert_eq!(obs.smile_probability, Some(0.1));
        assert_eq!(obs.left_eye_open_probability, Some(0.9));
        assert_eq!(obs.right_eye_open_probability, Some(0.8));
    }
}
