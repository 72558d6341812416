//! Windowed front end: winit for the window and input, pixels for showing the
//! newest published frame.

mod app;
mod controls;
mod events;
mod presenter;

pub use app::run_gui;
pub use events::GuiEvent;
