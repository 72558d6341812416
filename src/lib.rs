pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
mod input;
pub mod native;

pub use crate::controllers::interactive::{
    FrameReady, FrameReadySink, PipelineConfig, PipelineError, RenderPipeline,
};
pub use crate::core::camera::camera_model::CameraModel;
pub use crate::core::colour::classic_colour_map::ClassicColourMap;
pub use crate::core::colour::ports::ColourMap;
pub use crate::core::data::camera_state::CameraState;
pub use crate::core::data::pixel_size::PixelSize;
pub use crate::core::data::point::{PixelDelta, PixelPoint, WorldPoint};
pub use crate::core::data::render_settings::RenderSettings;
pub use crate::core::data::render_stats::RenderStats;
pub use crate::core::frame::frame_target::{FrameSnapshot, FrameTarget};
pub use crate::core::kernels::kinds::KernelKind;
pub use crate::core::kernels::native_kernel::NativeKernel;
pub use crate::core::kernels::ports::fractal_kernel::FractalKernel;
pub use crate::core::kernels::registry::KernelRegistry;
pub use crate::core::kernels::software_kernel::SoftwareKernel;

#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
