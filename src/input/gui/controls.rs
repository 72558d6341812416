//! Translation of raw winit input into pipeline operations.

use winit::dpi::PhysicalSize;
use winit::event::MouseScrollDelta;
use winit::keyboard::{Key, NamedKey};

use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::{PixelDelta, PixelPoint};
use crate::core::kernels::kinds::KernelKind;

/// Zoom units per scrolled line, matching one notch of a classic wheel.
pub const WHEEL_DELTA_PER_LINE: f64 = 120.0;
pub const KEYBOARD_ITERATIONS_LIMIT: u32 = 1 << 20;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyAction {
    SelectKernel(KernelKind),
    MoreIterations,
    FewerIterations,
    LogStats,
}

#[must_use]
pub fn key_action(key: &Key) -> Option<KeyAction> {
    match key {
        Key::Character(text) => match text.as_str() {
            "1" => Some(KeyAction::SelectKernel(KernelKind::Software)),
            "2" => Some(KeyAction::SelectKernel(KernelKind::Native)),
            "+" | "=" => Some(KeyAction::MoreIterations),
            "-" => Some(KeyAction::FewerIterations),
            "s" | "S" => Some(KeyAction::LogStats),
            _ => None,
        },
        Key::Named(NamedKey::ArrowUp) => Some(KeyAction::MoreIterations),
        Key::Named(NamedKey::ArrowDown) => Some(KeyAction::FewerIterations),
        _ => None,
    }
}

/// Doubles or halves the iteration limit, staying within `1..=KEYBOARD_ITERATIONS_LIMIT`.
#[must_use]
pub fn scaled_iterations(current: u32, more: bool) -> u32 {
    let scaled = if more {
        current.saturating_mul(2)
    } else {
        current / 2
    };

    scaled.clamp(1, KEYBOARD_ITERATIONS_LIMIT)
}

/// Positive for scrolling up (zoom in).
#[must_use]
pub fn zoom_delta(delta: MouseScrollDelta) -> i64 {
    let units = match delta {
        MouseScrollDelta::LineDelta(_, lines) => f64::from(lines) * WHEEL_DELTA_PER_LINE,
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    units.round() as i64
}

#[must_use]
pub fn pixel_size(size: PhysicalSize<u32>) -> PixelSize {
    PixelSize::new(
        i32::try_from(size.width).unwrap_or(i32::MAX),
        i32::try_from(size.height).unwrap_or(i32::MAX),
    )
}

/// Turns a stream of cursor positions into drag deltas while the button is held.
#[derive(Debug, Default)]
pub struct DragTracker {
    dragging: bool,
    cursor: Option<PixelPoint>,
}

impl DragTracker {
    pub fn press(&mut self) {
        self.dragging = true;
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    #[must_use]
    pub fn cursor(&self) -> Option<PixelPoint> {
        self.cursor
    }

    /// Records the new cursor position and returns the drag delta, if dragging.
    pub fn move_to(&mut self, position: PixelPoint) -> Option<PixelDelta> {
        let previous = self.cursor.replace(position)?;

        if !self.dragging {
            return None;
        }

        Some(PixelDelta::new(position.x - previous.x, position.y - previous.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_key_action_maps_kernel_keys() {
        assert_eq!(
            key_action(&Key::Character("1".into())),
            Some(KeyAction::SelectKernel(KernelKind::Software))
        );
        assert_eq!(
            key_action(&Key::Character("2".into())),
            Some(KeyAction::SelectKernel(KernelKind::Native))
        );
        assert_eq!(
            key_action(&Key::Named(NamedKey::ArrowUp)),
            Some(KeyAction::MoreIterations)
        );
        assert_eq!(key_action(&Key::Character("x".into())), None);
    }

    #[test]
    fn test_scaled_iterations_stays_in_range() {
        assert_eq!(scaled_iterations(256, true), 512);
        assert_eq!(scaled_iterations(256, false), 128);
        assert_eq!(scaled_iterations(1, false), 1);
        assert_eq!(scaled_iterations(u32::MAX, true), KEYBOARD_ITERATIONS_LIMIT);
    }

    #[test]
    fn test_zoom_delta_from_lines_and_pixels() {
        assert_eq!(zoom_delta(MouseScrollDelta::LineDelta(0.0, 1.0)), 120);
        assert_eq!(zoom_delta(MouseScrollDelta::LineDelta(0.0, -0.5)), -60);
        assert_eq!(
            zoom_delta(MouseScrollDelta::PixelDelta(PhysicalPosition::new(3.0, -42.4))),
            -42
        );
    }

    #[test]
    fn test_pixel_size_saturates() {
        assert_eq!(pixel_size(PhysicalSize::new(800, 600)), PixelSize::new(800, 600));
        assert_eq!(
            pixel_size(PhysicalSize::new(u32::MAX, 0)),
            PixelSize::new(i32::MAX, 0)
        );
    }

    #[test]
    fn test_drag_tracker_only_reports_while_pressed() {
        let mut drag = DragTracker::default();

        assert_eq!(drag.move_to(PixelPoint::new(10.0, 10.0)), None);
        assert_eq!(drag.move_to(PixelPoint::new(12.0, 10.0)), None);

        drag.press();
        assert_eq!(
            drag.move_to(PixelPoint::new(15.0, 6.0)),
            Some(PixelDelta::new(3.0, -4.0))
        );

        drag.release();
        assert_eq!(drag.move_to(PixelPoint::new(20.0, 20.0)), None);
        assert_eq!(drag.cursor(), Some(PixelPoint::new(20.0, 20.0)));
    }
}
