//! Packed 32-bit colours, alpha/red/green/blue from the most significant byte.

pub const ALPHA_OPAQUE: u32 = 0xff00_0000;
pub const OPAQUE_BLACK: u32 = ALPHA_OPAQUE;

#[inline]
#[must_use]
pub fn pack_argb(r: u8, g: u8, b: u8) -> u32 {
    ALPHA_OPAQUE | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

#[inline]
#[must_use]
pub fn unpack_rgb(colour: u32) -> (u8, u8, u8) {
    (
        ((colour >> 16) & 0xff) as u8,
        ((colour >> 8) & 0xff) as u8,
        (colour & 0xff) as u8,
    )
}

#[inline]
#[must_use]
pub fn alpha(colour: u32) -> u8 {
    (colour >> 24) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_argb_channel_order() {
        assert_eq!(pack_argb(0x12, 0x34, 0x56), 0xff12_3456);
    }

    #[test]
    fn test_unpack_rgb_reverses_pack() {
        assert_eq!(unpack_rgb(pack_argb(200, 100, 1)), (200, 100, 1));
    }

    #[test]
    fn test_black_is_opaque() {
        assert_eq!(alpha(OPAQUE_BLACK), 0xff);
        assert_eq!(unpack_rgb(OPAQUE_BLACK), (0, 0, 0));
    }
}
