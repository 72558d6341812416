use crate::core::camera::errors::CameraModelError;
use crate::core::data::camera_state::CameraState;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::{PixelDelta, PixelPoint, WorldPoint};

pub const DEFAULT_MIN_ZOOM: u64 = 1;
pub const DEFAULT_MAX_ZOOM: u64 = u64::MAX;

/// Owns the authoritative [`CameraState`] and the zoom bounds.
///
/// Every mutation builds a new state and replaces the old one wholesale, so
/// [`CameraModel::snapshot`] is just a copy.
#[derive(Debug, Clone)]
pub struct CameraModel {
    state: CameraState,
    min_zoom: u64,
    max_zoom: u64,
}

impl CameraModel {
    pub fn new(initial: CameraState, min_zoom: u64, max_zoom: u64) -> Result<Self, CameraModelError> {
        if min_zoom == 0 {
            return Err(CameraModelError::ZeroMinZoom);
        }

        if max_zoom <= min_zoom {
            return Err(CameraModelError::MaxZoomNotAboveMin { min_zoom, max_zoom });
        }

        let state = CameraState {
            zoom: initial.zoom.clamp(min_zoom, max_zoom),
            ..initial
        };

        Ok(Self {
            state,
            min_zoom,
            max_zoom,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> CameraState {
        self.state
    }

    #[must_use]
    pub fn min_zoom(&self) -> u64 {
        self.min_zoom
    }

    #[must_use]
    pub fn max_zoom(&self) -> u64 {
        self.max_zoom
    }

    pub fn set_viewport(&mut self, size: PixelSize) {
        if !size.is_valid() {
            return;
        }

        self.state = CameraState {
            viewport_px: size,
            ..self.state
        };
    }

    /// Grab-and-drag panning: dragging right moves the content right, so the
    /// center moves left in world space. Dragging down moves it up in world
    /// space because world Y points up.
    pub fn pan_by_pixels(&mut self, delta: PixelDelta) {
        let state = self.state;

        if !state.viewport_px.is_valid() {
            return;
        }

        let inv_zoom = 1.0 / state.zoom as f64;
        let delta_world = WorldPoint {
            x: -delta.x * inv_zoom,
            y: delta.y * inv_zoom,
        };

        self.state = CameraState {
            center_world: state.center_world + delta_world,
            ..state
        };
    }

    /// Zooms by `delta` while keeping the world point under `anchor` fixed on
    /// screen. The zoom is changed first and the center re-anchored after.
    pub fn zoom_at_pixel(&mut self, anchor: PixelPoint, delta: i64) {
        let state = self.state;

        if !state.viewport_px.is_valid() {
            return;
        }

        let world_before = state.screen_to_world(anchor);

        let zoomed = CameraState {
            zoom: self.apply_zoom_delta(state.zoom, delta),
            ..state
        };
        let world_after = zoomed.screen_to_world(anchor);

        self.state = CameraState {
            center_world: zoomed.center_world + (world_before - world_after),
            ..zoomed
        };
    }

    #[must_use]
    pub fn screen_to_world(&self, px: PixelPoint) -> WorldPoint {
        self.state.screen_to_world(px)
    }

    #[must_use]
    pub fn world_to_screen(&self, world: WorldPoint) -> PixelPoint {
        self.state.world_to_screen(world)
    }

    fn apply_zoom_delta(&self, zoom: u64, delta: i64) -> u64 {
        let raw = if delta >= 0 {
            zoom.saturating_add(delta.unsigned_abs())
        } else {
            zoom.saturating_sub(delta.unsigned_abs())
        };

        raw.clamp(self.min_zoom, self.max_zoom)
    }
}
