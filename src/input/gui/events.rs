use crate::controllers::interactive::events::frame_ready::FrameReady;

/// User events sent to the winit event loop from the render worker.
#[derive(Debug, Clone, Copy)]
pub enum GuiEvent {
    /// A new frame was published. The handler decides whether to redraw.
    FrameReady(FrameReady),
}
