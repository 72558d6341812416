//! Main GUI application loop.

use std::error::Error;
use std::sync::Arc;

use log::{error, info, trace, warn};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{EventLoopBuilder, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::config::PipelineConfig;
use crate::controllers::interactive::pipeline::RenderPipeline;
use crate::core::data::point::PixelPoint;
use crate::input::gui::controls::{
    DragTracker, KeyAction, key_action, pixel_size, scaled_iterations, zoom_delta,
};
use crate::input::gui::events::GuiEvent;
use crate::input::gui::presenter::{PixelsPresenter, ProxyFrameSink};

struct GuiApp {
    window: &'static Window,
    pipeline: RenderPipeline,
    presenter: PixelsPresenter,
    drag: DragTracker,
}

impl GuiApp {
    fn handle_event(&mut self, event: Event<GuiEvent>, elwt: &EventLoopWindowTarget<GuiEvent>) {
        match event {
            Event::UserEvent(GuiEvent::FrameReady(frame)) => {
                trace!("frame {} ready", frame.frame_id);
                if frame.frame_id != self.presenter.shown_frame_id() {
                    self.window.request_redraw();
                }
            }
            Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                self.handle_window_event(event, elwt);
            }
            _ => {}
        }
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<GuiEvent>) {
        match event {
            WindowEvent::CloseRequested => {
                self.pipeline.stop();
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.presenter.present(&self.pipeline) {
                    error!("render error: {}", err);
                    self.pipeline.stop();
                    elwt.exit();
                    return;
                }

                self.pipeline.drain_retired();
                self.window
                    .set_title(&format!("Mandelbrot | {}", self.pipeline.stats()));
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = self.presenter.resize(size.width, size.height) {
                    error!("resize error: {}", err);
                    return;
                }

                self.pipeline.set_viewport(pixel_size(size));
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(delta) = self.drag.move_to(PixelPoint::new(position.x, position.y)) {
                    self.pipeline.pan_by_pixels(delta);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.drag.press(),
                ElementState::Released => self.drag.release(),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(anchor) = self.drag.cursor() {
                    self.pipeline.zoom_at_pixel(anchor, zoom_delta(delta));
                }
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let Some(action) = key_action(&event.logical_key) {
                    self.apply_key_action(action);
                }
            }
            _ => {}
        }
    }

    fn apply_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::SelectKernel(kind) => {
                if let Err(err) = self.pipeline.set_kernel(kind) {
                    warn!("{}", err);
                }
            }
            KeyAction::MoreIterations | KeyAction::FewerIterations => {
                let current = self.pipeline.settings().max_iterations();
                let next = scaled_iterations(current, action == KeyAction::MoreIterations);

                info!("max iterations {} -> {}", current, next);
                self.pipeline.set_max_iterations(next);
            }
            KeyAction::LogStats => {
                let camera = self.pipeline.camera();

                info!(
                    "{} | kernel {} | center ({}, {}) | zoom {} ({:.2}x)",
                    self.pipeline.stats(),
                    self.pipeline.kernel(),
                    camera.center_world.x,
                    camera.center_world.y,
                    camera.zoom,
                    camera.magnification()
                );
            }
        }
    }
}

/// Opens the explorer window and runs until it is closed.
pub fn run_gui(config: PipelineConfig) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
    let event_loop_proxy = event_loop.create_proxy();

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot")
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window)?;
    let frame_sink = Arc::new(ProxyFrameSink::new(event_loop_proxy));
    let mut pipeline = RenderPipeline::new(config, frame_sink)?;

    pipeline.set_viewport(pixel_size(window.inner_size()));
    pipeline.start()?;

    let mut app = GuiApp {
        window,
        pipeline,
        presenter,
        drag: DragTracker::default(),
    };

    event_loop.run(move |event, elwt| app.handle_event(event, elwt))?;

    Ok(())
}
