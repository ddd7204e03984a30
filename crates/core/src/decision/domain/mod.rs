pub mod axis_evaluator;
pub mod decision;
pub mod head_pose;
pub mod observation_source;
pub mod pose_evaluator;
pub mod result_sink;
pub mod trait_evaluator;
