//! Interactive render pipeline.
//!
//! The pipeline owns the camera, the kernel registry and the current
//! [`FrameTarget`](crate::core::frame::frame_target::FrameTarget). Input
//! handlers mutate state and raise coalescing render requests; a single
//! background worker renders into the target's back buffer and publishes it.
//!
//! - **Input**: camera and settings operations on [`RenderPipeline`]
//! - **Output**: [`FrameReadySink`] notifications and
//!   [`RenderPipeline::with_latest_frame`] for reading pixels
//! - **Core**: kernels, colour mapping and frame publication from `core/`

pub mod config;
pub mod errors;
pub mod events;
pub mod pipeline;
pub mod ports;
pub mod render_signal;

pub use config::PipelineConfig;
pub use errors::PipelineError;
pub use events::frame_ready::FrameReady;
pub use pipeline::RenderPipeline;
pub use ports::frame_ready_sink::FrameReadySink;
