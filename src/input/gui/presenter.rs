use std::sync::Mutex;

use log::trace;
use pixels::{Pixels, SurfaceTexture};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::copy_argb_to_rgba;
use crate::controllers::interactive::events::frame_ready::FrameReady;
use crate::controllers::interactive::pipeline::RenderPipeline;
use crate::controllers::interactive::ports::frame_ready_sink::FrameReadySink;
use crate::input::gui::events::GuiEvent;

/// Forwards frame notifications from the render worker to the event loop.
pub struct ProxyFrameSink {
    event_loop_proxy: Mutex<EventLoopProxy<GuiEvent>>,
}

impl ProxyFrameSink {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            event_loop_proxy: Mutex::new(event_loop_proxy),
        }
    }
}

impl FrameReadySink for ProxyFrameSink {
    fn frame_ready(&self, event: FrameReady) {
        let proxy = self
            .event_loop_proxy
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        // Fails only once the event loop has exited.
        let _ = proxy.send_event(GuiEvent::FrameReady(event));
    }
}

/// Copies the newest published frame into the pixels framebuffer.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
    shown_frame_id: u64,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            width: size.width,
            height: size.height,
            shown_frame_id: 0,
        })
    }

    #[must_use]
    pub fn shown_frame_id(&self) -> u64 {
        self.shown_frame_id
    }

    /// Resizes both the surface and the framebuffer. Zero sizes (minimised
    /// windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.width = width;
        self.height = height;
        self.shown_frame_id = 0;

        Ok(())
    }

    /// Shows the pipeline's latest frame if it matches the framebuffer size,
    /// otherwise re-presents whatever was shown last.
    pub fn present(&mut self, pipeline: &RenderPipeline) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let (width, height) = (self.width, self.height);
        let frame = self.pixels.frame_mut();

        let copied = pipeline
            .with_latest_frame(|snapshot| {
                if snapshot.width() as u32 != width || snapshot.height() as u32 != height {
                    return None;
                }

                copy_argb_to_rgba(snapshot.pixels(), frame);
                Some(snapshot.frame_id())
            })
            .flatten();

        match copied {
            Some(frame_id) => self.shown_frame_id = frame_id,
            None => trace!("no frame matching {}x{} yet", width, height),
        }

        self.pixels.render()
    }
}
