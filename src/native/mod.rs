//! C ABI entry points for hosts that load this crate as a shared library.
//!
//! The Rust side of the pipeline reaches these through
//! [`NativeKernel`](crate::core::kernels::native_kernel::NativeKernel) via
//! function pointers, exactly as a foreign host would.

use rayon::prelude::*;

use crate::core::colour::classic_colour_map::ClassicColourMap;
use crate::core::colour::ports::ColourMap;
use crate::core::kernels::escape_time::{PixelGeometry, escape_iterations};

/// Bumped whenever the signature or pixel format of the render entry point
/// changes.
pub const MANDELBROT_ABI_VERSION: u32 = 1;

#[unsafe(no_mangle)]
pub extern "C" fn mandelbrot_abi_version() -> u32 {
    MANDELBROT_ABI_VERSION
}

/// Renders one frame of packed ARGB colours into `dst`, row-major, top row
/// first. Does nothing for non-positive sizes, zero zoom, a null `dst` or a
/// `dst_len` shorter than `width * height`. Never writes more than
/// `width * height` words.
///
/// # Safety
///
/// `dst` must be valid for writes of `dst_len` consecutive `u32`s for the
/// whole call, and no other thread may access that memory meanwhile.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mandelbrot_render_u32(
    center_x: f64,
    center_y: f64,
    zoom: u64,
    width: i32,
    height: i32,
    max_iterations: i32,
    dst: *mut u32,
    dst_len: usize,
) {
    if dst.is_null() {
        return;
    }

    let Some(geometry) = PixelGeometry::new(center_x, center_y, zoom, width, height, dst_len)
    else {
        return;
    };

    // SAFETY: the caller guarantees `dst` is valid for `dst_len` writes and
    // `PixelGeometry::new` checked `pixel_count() <= dst_len`.
    let pixels = unsafe { std::slice::from_raw_parts_mut(dst, geometry.pixel_count()) };

    let max_iterations = max_iterations.max(0).unsigned_abs();
    let colour_map = ClassicColourMap::default();

    pixels
        .par_chunks_mut(geometry.width)
        .enumerate()
        .for_each(|(py, row)| {
            let y0 = geometry.world_y(py);

            for (px, out) in row.iter_mut().enumerate() {
                let iterations = escape_iterations(geometry.world_x(px), y0, max_iterations);
                *out = colour_map.colour(iterations, max_iterations);
            }
        });
}
