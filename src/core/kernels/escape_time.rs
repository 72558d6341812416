//! The escape-time recurrence and pixel geometry shared by every kernel.

/// Escape radius 2, compared squared.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Per-frame constants for mapping a pixel to its point in the plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub inv_zoom: f64,
    pub half_width: f64,
    pub half_height: f64,
    pub width: usize,
    pub height: usize,
}

impl PixelGeometry {
    /// Validates a render request. Returns `None` for anything a kernel must
    /// treat as a no-op.
    #[must_use]
    pub fn new(
        center_x: f64,
        center_y: f64,
        zoom: u64,
        width: i32,
        height: i32,
        dst_len: usize,
    ) -> Option<Self> {
        if width <= 0 || height <= 0 || zoom == 0 {
            return None;
        }

        let width_px = width as usize;
        let height_px = height as usize;
        let required = width_px.checked_mul(height_px)?;

        if dst_len < required {
            return None;
        }

        Some(Self {
            center_x,
            center_y,
            inv_zoom: 1.0 / zoom as f64,
            half_width: f64::from(width) * 0.5,
            half_height: f64::from(height) * 0.5,
            width: width_px,
            height: height_px,
        })
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    #[must_use]
    pub fn world_x(&self, px: usize) -> f64 {
        self.center_x + (px as f64 - self.half_width) * self.inv_zoom
    }

    /// Screen Y grows down, world Y grows up.
    #[inline]
    #[must_use]
    pub fn world_y(&self, py: usize) -> f64 {
        self.center_y - (py as f64 - self.half_height) * self.inv_zoom
    }
}

/// Counts iterations of `z = z^2 + c` from `z = 0` until `|z|^2 > 4` or the
/// cap is reached.
#[inline]
#[must_use]
pub fn escape_iterations(x0: f64, y0: f64, max_iterations: u32) -> u32 {
    let mut x = 0.0_f64;
    let mut y = 0.0_f64;
    let mut i = 0_u32;

    while i < max_iterations {
        let xx = x * x - y * y + x0;
        let yy = 2.0 * x * y + y0;
        x = xx;
        y = yy;

        if x * x + y * y > ESCAPE_RADIUS_SQUARED {
            break;
        }
        i += 1;
    }

    i
}
