//! Packed ARGB color helpers
//!
//! The engine works on `u32` colors laid out as `0xAARRGGBB`. These helpers
//! convert between that layout and the `image` crate's `Rgba<u8>`.

use image::Rgba;

/// Mask selecting the 24-bit RGB part of a packed color.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// Pack four channels into an `0xAARRGGBB` value.
#[inline]
pub const fn pack(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Alpha channel, extracted by shifting.
#[inline]
pub const fn alpha(c: u32) -> u8 {
    (c >> 24) as u8
}

#[inline]
pub const fn red(c: u32) -> u8 {
    (c >> 16) as u8
}

#[inline]
pub const fn green(c: u32) -> u8 {
    (c >> 8) as u8
}

#[inline]
pub const fn blue(c: u32) -> u8 {
    c as u8
}

/// Convert an `image` pixel into a packed color.
#[inline]
pub fn from_rgba(px: Rgba<u8>) -> u32 {
    let [r, g, b, a] = px.0;
    pack(a, r, g, b)
}

/// Convert a packed color into an `image` pixel.
#[inline]
pub fn to_rgba(c: u32) -> Rgba<u8> {
    Rgba([red(c), green(c), blue(c), alpha(c)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        assert_eq!(pack(0xFF, 0xFF, 0, 0), 0xFFFF0000);
        assert_eq!(pack(0x80, 0x12, 0x34, 0x56), 0x80123456);
    }

    #[test]
    fn test_channel_extraction() {
        let c = 0x80123456;
        assert_eq!(alpha(c), 0x80);
        assert_eq!(red(c), 0x12);
        assert_eq!(green(c), 0x34);
        assert_eq!(blue(c), 0x56);
    }

    #[test]
    fn test_rgba_conversion() {
        let px = Rgba([10, 20, 30, 40]);
        let packed = from_rgba(px);
        assert_eq!(packed, 0x280A141E);
        assert_eq!(to_rgba(packed), px);
    }

    #[test]
    fn test_rgb_mask_drops_alpha() {
        assert_eq!(0xFFABCDEF & RGB_MASK, 0x00ABCDEF);
    }
}
