pub mod frame_target;
pub mod retired_targets;
