//! Pixel format conversion helpers for presentation adapters.

use crate::core::colour::packed_colour::{alpha, unpack_rgb};

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Copies packed ARGB pixels into an RGBA byte buffer, keeping each pixel's
/// alpha.
///
/// # Panics
/// Panics if `dst.len()` is not exactly `src.len() * 4`.
pub fn copy_argb_to_rgba(src: &[u32], dst: &mut [u8]) {
    let expected_dst_len = src.len() * RGBA_BYTES_PER_PIXEL;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (&colour, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL)) {
        let (r, g, b) = unpack_rgb(colour);

        dst_pixel[0] = r;
        dst_pixel[1] = g;
        dst_pixel[2] = b;
        dst_pixel[3] = alpha(colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour::packed_colour::{OPAQUE_BLACK, pack_argb};

    #[test]
    fn test_copy_argb_to_rgba_known_values() {
        let src = vec![
            pack_argb(255, 0, 0),
            pack_argb(0, 255, 0),
            pack_argb(0, 0, 255),
            pack_argb(255, 255, 255),
        ];
        let mut dst = vec![0; src.len() * 4];

        copy_argb_to_rgba(&src, &mut dst);

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_argb_to_rgba_empty_buffers() {
        let src: Vec<u32> = vec![];
        let mut dst: Vec<u8> = vec![];

        copy_argb_to_rgba(&src, &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    fn test_copy_argb_to_rgba_keeps_alpha() {
        let src = vec![0x8040_2010, OPAQUE_BLACK];
        let mut dst = vec![0; 8];

        copy_argb_to_rgba(&src, &mut dst);

        assert_eq!(dst, vec![0x40, 0x20, 0x10, 0x80, 0, 0, 0, 255]);
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_argb_to_rgba_rejects_wrong_dst_len() {
        let src = vec![OPAQUE_BLACK; 3];
        let mut dst = vec![0; 8];

        copy_argb_to_rgba(&src, &mut dst);
    }
}
