use crate::core::colour::packed_colour::{OPAQUE_BLACK, pack_argb};
use crate::core::colour::ports::ColourMap;
use std::error::Error;
use std::fmt;

pub const DEFAULT_COLOUR_WIDTH: u32 = 50;

const RED: [u8; 8] = [0, 0, 0, 0, 128, 255, 255, 255];
const GREEN: [u8; 8] = [0, 0, 128, 255, 128, 128, 255, 255];
const BLUE: [u8; 8] = [0, 255, 255, 128, 0, 0, 128, 255];
const PALETTE_LEN: usize = RED.len();

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClassicColourMapError {
    ZeroColourWidth,
}

impl fmt::Display for ClassicColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColourWidth => write!(f, "colour width must be greater than zero"),
        }
    }
}

impl Error for ClassicColourMapError {}

/// Cyclic eight-anchor gradient.
///
/// The first `width` iterations ramp from anchor 0 to anchor 1; after that the
/// ramp cycles through anchors 1..=7 and wraps from 7 back to 1, `width`
/// iterations per segment. Points that never escaped are black.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClassicColourMap {
    width: u32,
}

impl ClassicColourMap {
    pub fn new(width: u32) -> Result<Self, ClassicColourMapError> {
        if width == 0 {
            return Err(ClassicColourMapError::ZeroColourWidth);
        }

        Ok(Self { width })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }
}

impl Default for ClassicColourMap {
    fn default() -> Self {
        Self {
            width: DEFAULT_COLOUR_WIDTH,
        }
    }
}

impl ColourMap for ClassicColourMap {
    #[inline]
    fn colour(&self, iteration: u32, max_iteration: u32) -> u32 {
        if iteration >= max_iteration {
            return OPAQUE_BLACK;
        }

        let width = self.width;

        if iteration < width {
            let t = f64::from(iteration) / f64::from(width);
            return lerp_anchors(0, 1, t);
        }

        let offset = iteration - width;
        let segment = (offset / width) as usize % (PALETTE_LEN - 1) + 1;
        let frac = f64::from(offset % width) / f64::from(width);

        let mut next = segment + 1;
        if next >= PALETTE_LEN {
            next = 1;
        }

        lerp_anchors(segment, next, frac)
    }

    fn display_name(&self) -> &str {
        "Classic cyclic gradient"
    }
}

#[inline]
fn lerp_anchors(from: usize, to: usize, t: f64) -> u32 {
    pack_argb(
        lerp_channel(RED[from], RED[to], t),
        lerp_channel(GREEN[from], GREEN[to], t),
        lerp_channel(BLUE[from], BLUE[to], t),
    )
}

#[inline]
fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }

    let value = (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round();
    value.clamp(0.0, 255.0) as u8
}
