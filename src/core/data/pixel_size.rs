/// Viewport dimensions in pixels.
///
/// Values are signed so that platform sizes (which may briefly report zero or
/// negative extents, e.g. while minimised) can be passed through and rejected
/// with [`PixelSize::is_valid`] instead of wrapping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PixelSize {
    pub width: i32,
    pub height: i32,
}

impl PixelSize {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Number of pixels, or `None` for an invalid size.
    #[must_use]
    pub fn pixel_count(&self) -> Option<usize> {
        if !self.is_valid() {
            return None;
        }

        (self.width as usize).checked_mul(self.height as usize)
    }
}
