use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::{PixelPoint, WorldPoint};

/// Immutable snapshot of the camera.
///
/// `zoom` is measured in pixels per world unit. The camera model replaces the
/// whole value on every mutation, so a copy is always a consistent snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraState {
    pub center_world: WorldPoint,
    pub initial_zoom: u64,
    pub zoom: u64,
    pub viewport_px: PixelSize,
}

impl CameraState {
    #[must_use]
    pub fn new(center_world: WorldPoint, zoom: u64, viewport_px: PixelSize) -> Self {
        Self {
            center_world,
            initial_zoom: zoom,
            zoom,
            viewport_px,
        }
    }

    /// Current zoom relative to the zoom the camera started at.
    #[must_use]
    pub fn magnification(&self) -> f64 {
        if self.initial_zoom == 0 {
            return 0.0;
        }

        self.zoom as f64 / self.initial_zoom as f64
    }

    /// Maps a pixel to the world point under it. Screen Y is down, world Y is up.
    #[must_use]
    pub fn screen_to_world(&self, px: PixelPoint) -> WorldPoint {
        let inv_zoom = 1.0 / self.zoom as f64;
        let half_w = f64::from(self.viewport_px.width) * 0.5;
        let half_h = f64::from(self.viewport_px.height) * 0.5;

        WorldPoint {
            x: self.center_world.x + (px.x - half_w) * inv_zoom,
            y: self.center_world.y - (px.y - half_h) * inv_zoom,
        }
    }

    #[must_use]
    pub fn world_to_screen(&self, world: WorldPoint) -> PixelPoint {
        let zoom = self.zoom as f64;
        let half_w = f64::from(self.viewport_px.width) * 0.5;
        let half_h = f64::from(self.viewport_px.height) * 0.5;
        let rel = world - self.center_world;

        PixelPoint {
            x: half_w + rel.x * zoom,
            y: half_h - rel.y * zoom,
        }
    }
}
