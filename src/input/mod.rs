//! Input adapters that drive the render pipeline.

#[cfg(feature = "gui")]
pub mod gui;
