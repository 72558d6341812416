use crate::core::data::camera_state::CameraState;
use crate::core::data::render_settings::RenderSettings;

/// A strategy that fills a pixel buffer with one escape-time frame.
///
/// `render` must write exactly `width * height` packed ARGB colours in
/// row-major order, top row first, or nothing at all when the geometry is
/// degenerate (non-positive dimensions, zero zoom, undersized `dst`). It must
/// not keep any reference to `dst` after returning.
pub trait FractalKernel: Send + Sync {
    fn name(&self) -> &str;

    fn render(
        &self,
        camera: &CameraState,
        settings: &RenderSettings,
        width: i32,
        height: i32,
        dst: &mut [u32],
    );
}
