/// Maximum smiling probability still considered a neutral expression.
pub const NEUTRAL_SMILE_MAX: f32 = 0.2;

/// Eye-open probability must strictly exceed this to count as open.
pub const EYE_OPEN_MIN: f32 = 0.6;

/// Neutral-expression check, inclusive at the threshold.
pub fn is_neutral_expression(smile_probability: f32) -> bool {
    smile_probability <= NEUTRAL_SMILE_MAX
}

/// Eye-openness check, strict at the threshold.
pub fn is_eye_open(open_probability: f32) -> bool {
    open_probability > EYE_OPEN_MIN
}
