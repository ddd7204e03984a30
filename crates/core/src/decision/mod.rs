pub mod domain;
pub mod evaluate_frame_use_case;
pub mod infrastructure;
