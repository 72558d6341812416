use crate::core::camera::camera_model::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
use crate::core::colour::classic_colour_map::DEFAULT_COLOUR_WIDTH;
use crate::core::data::point::WorldPoint;
use crate::core::data::render_settings::DEFAULT_MAX_ITERATIONS;
use crate::core::kernels::kinds::KernelKind;
use crate::core::stats::frame_time_averager::DEFAULT_AVERAGER_WINDOW;

pub const DEFAULT_CENTER: WorldPoint = WorldPoint::new(-0.5, 0.0);
pub const DEFAULT_INITIAL_ZOOM: u64 = 300;

/// Start-up parameters for a [`RenderPipeline`](super::pipeline::RenderPipeline).
///
/// Invalid combinations are rejected by `RenderPipeline::new`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    pub initial_center: WorldPoint,
    /// Pixels per world unit.
    pub initial_zoom: u64,
    pub min_zoom: u64,
    pub max_zoom: u64,
    pub max_iterations: u32,
    pub kernel: KernelKind,
    /// Number of frames in the rolling compute-time average.
    pub averager_window: usize,
    /// Iterations per palette segment.
    pub colour_width: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            initial_center: DEFAULT_CENTER,
            initial_zoom: DEFAULT_INITIAL_ZOOM,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            kernel: KernelKind::default(),
            averager_window: DEFAULT_AVERAGER_WINDOW,
            colour_width: DEFAULT_COLOUR_WIDTH,
        }
    }
}

impl PipelineConfig {
    #[must_use]
    pub fn with_kernel(self, kernel: KernelKind) -> Self {
        Self { kernel, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();

        assert_eq!(config.initial_center, WorldPoint::new(-0.5, 0.0));
        assert_eq!(config.initial_zoom, 300);
        assert_eq!(config.min_zoom, 1);
        assert_eq!(config.max_zoom, u64::MAX);
        assert_eq!(config.max_iterations, 256);
        assert_eq!(config.kernel, KernelKind::Software);
        assert_eq!(config.averager_window, 60);
        assert_eq!(config.colour_width, 50);
    }

    #[test]
    fn test_with_kernel() {
        let config = PipelineConfig::default().with_kernel(KernelKind::Native);

        assert_eq!(config.kernel, KernelKind::Native);
        assert_eq!(config.initial_zoom, 300);
    }
}
