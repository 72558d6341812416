use std::time::Duration;

/// Fired once per successful publish, on the render worker thread.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameReady {
    pub frame_id: u64,
    pub width: i32,
    pub height: i32,
    pub compute_duration: Duration,
}
