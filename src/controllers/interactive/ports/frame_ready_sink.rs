use crate::controllers::interactive::events::frame_ready::FrameReady;

/// Receives "frame ready" notifications from the render worker.
///
/// Called on the worker thread; implementations marshal to whatever thread
/// they need and must not block for long.
pub trait FrameReadySink: Send + Sync {
    fn frame_ready(&self, event: FrameReady);
}

impl<F> FrameReadySink for F
where
    F: Fn(FrameReady) + Send + Sync,
{
    fn frame_ready(&self, event: FrameReady) {
        self(event);
    }
}
