use rayon::prelude::*;

use crate::core::colour::classic_colour_map::ClassicColourMap;
use crate::core::colour::ports::ColourMap;
use crate::core::data::camera_state::CameraState;
use crate::core::data::render_settings::RenderSettings;
use crate::core::kernels::escape_time::{PixelGeometry, escape_iterations};
use crate::core::kernels::ports::fractal_kernel::FractalKernel;

/// Pure-Rust kernel, parallelised by row with rayon's work-stealing pool.
///
/// Each row is a disjoint `&mut` chunk of the destination, so rows need no
/// coordination.
#[derive(Debug, Default)]
pub struct SoftwareKernel<C: ColourMap = ClassicColourMap> {
    colour_map: C,
}

impl<C: ColourMap> SoftwareKernel<C> {
    #[must_use]
    pub fn new(colour_map: C) -> Self {
        Self { colour_map }
    }

    #[must_use]
    pub fn colour_map(&self) -> &C {
        &self.colour_map
    }
}

impl<C: ColourMap> FractalKernel for SoftwareKernel<C> {
    fn name(&self) -> &str {
        "Rust baseline (rayon)"
    }

    fn render(
        &self,
        camera: &CameraState,
        settings: &RenderSettings,
        width: i32,
        height: i32,
        dst: &mut [u32],
    ) {
        let Some(geometry) = PixelGeometry::new(
            camera.center_world.x,
            camera.center_world.y,
            camera.zoom,
            width,
            height,
            dst.len(),
        ) else {
            return;
        };

        let max_iterations = settings.max_iterations();
        let pixels = &mut dst[..geometry.pixel_count()];

        pixels
            .par_chunks_mut(geometry.width)
            .enumerate()
            .for_each(|(py, row)| {
                let y0 = geometry.world_y(py);

                for (px, out) in row.iter_mut().enumerate() {
                    let iterations = escape_iterations(geometry.world_x(px), y0, max_iterations);
                    *out = self.colour_map.colour(iterations, max_iterations);
                }
            });
    }
}
