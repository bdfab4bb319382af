//! Magnification of `image::RgbaImage` buffers.

use crate::color::{from_rgba, to_rgba};
use crate::config::MagnifyConfig;
use crate::error::{HqxError, Result};
use crate::magnify::Magnifier;
use image::RgbaImage;

/// Magnify an RGBA image with the filter selected in `config`.
///
/// # Arguments
///
/// * `image` - The input RGBA image to scale
/// * `config` - Filter, thresholds and wrap settings
///
/// # Returns
///
/// A new RGBA image at N times the original dimensions.
///
/// # Errors
///
/// Returns [`HqxError::CacheNotInitialized`] unless [`crate::yuv::init`] has
/// run, or [`HqxError::DimensionOverflow`] if the output would not fit in
/// `u32` dimensions.
pub fn scale_image(image: &RgbaImage, config: &MagnifyConfig) -> Result<RgbaImage> {
    let magnifier = Magnifier::new(config)?;
    scale_image_with(&magnifier, image)
}

/// Magnify an RGBA image with an existing [`Magnifier`].
pub fn scale_image_with(magnifier: &Magnifier, image: &RgbaImage) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    let n = magnifier.factor();
    let overflow = HqxError::DimensionOverflow {
        width: width as usize,
        height: height as usize,
        factor: n,
    };
    let out_w = width.checked_mul(n as u32).ok_or_else(|| overflow.clone())?;
    let out_h = height.checked_mul(n as u32).ok_or(overflow)?;

    let src: Vec<u32> = image.pixels().map(|px| from_rgba(*px)).collect();
    let dst = magnifier.magnify_to_vec(&src, width as usize, height as usize)?;

    let mut output = RgbaImage::new(out_w, out_h);
    for (px, &color) in output.pixels_mut().zip(&dst) {
        *px = to_rgba(color);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magnify::Scale;
    use crate::yuv;
    use image::Rgba;

    fn create_test_image(width: u32, height: u32) -> RgbaImage {
        let mut image = RgbaImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let r = ((x * 255) / width.max(1)) as u8;
                let g = ((y * 255) / height.max(1)) as u8;
                image.put_pixel(x, y, Rgba([r, g, 128, 255]));
            }
        }
        image
    }

    #[test]
    fn test_scale_image_dimensions() {
        yuv::init();
        let image = create_test_image(5, 3);
        for scale in [Scale::Hq3x, Scale::Hq4x] {
            let config = MagnifyConfig { scale, ..Default::default() };
            let scaled = scale_image(&image, &config).unwrap();
            let n = scale.factor() as u32;
            assert_eq!(scaled.dimensions(), (5 * n, 3 * n));
        }
    }

    #[test]
    fn test_scale_image_preserves_solid_color() {
        let magnifier = Magnifier::with_cache(yuv::init(), &MagnifyConfig::default());
        let color = Rgba([12, 200, 77, 190]);
        let image = RgbaImage::from_pixel(3, 2, color);
        let scaled = scale_image_with(&magnifier, &image).unwrap();
        assert!(scaled.pixels().all(|px| *px == color));
    }

    #[test]
    fn test_scale_image_matches_packed_path() {
        let magnifier = Magnifier::with_cache(yuv::init(), &MagnifyConfig::default());
        let image = create_test_image(4, 4);
        let scaled = scale_image_with(&magnifier, &image).unwrap();

        let src: Vec<u32> = image.pixels().map(|px| from_rgba(*px)).collect();
        let packed = magnifier.magnify_to_vec(&src, 4, 4).unwrap();
        let unpacked: Vec<u32> = scaled.pixels().map(|px| from_rgba(*px)).collect();
        assert_eq!(unpacked, packed);
    }
}
