//! hq3x/hq4x magnification driver.
//!
//! # Algorithm Overview
//!
//! For every source pixel the driver:
//! 1. Gathers the 3x3 neighborhood, wrapping or clamping at the bitmap edges
//! 2. Classifies it into an 8-bit edge pattern (see [`crate::classify`])
//! 3. Runs the pattern's entry in the factor's [`PatternTable`]
//! 4. Writes the resulting N×N block into the destination
//!
//! Source rows are independent, so the parallel path splits the destination
//! into N-row bands and hands each band to rayon. Both paths produce identical
//! output.

use crate::classify::{Classifier, Neighborhood};
use crate::config::MagnifyConfig;
use crate::error::{HqxError, Result};
use crate::table::PatternTable;
use crate::yuv::{self, YuvTable};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Supported magnification filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// 3x magnification
    Hq3x,
    /// 4x magnification (default)
    #[default]
    Hq4x,
}

impl Scale {
    /// Returns the integer factor applied to each dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use hqscale::Scale;
    ///
    /// assert_eq!(Scale::Hq3x.factor(), 3);
    /// assert_eq!(Scale::Hq4x.factor(), 4);
    /// ```
    pub fn factor(&self) -> usize {
        match self {
            Scale::Hq3x => 3,
            Scale::Hq4x => 4,
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scale::Hq3x => write!(f, "hq3x"),
            Scale::Hq4x => write!(f, "hq4x"),
        }
    }
}

impl FromStr for Scale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hq3x" | "3" | "3x" => Ok(Scale::Hq3x),
            "hq4x" | "4" | "4x" => Ok(Scale::Hq4x),
            other => Err(format!("unknown scale '{}', expected hq3x or hq4x", other)),
        }
    }
}

/// A configured filter bound to a YUV cache handle.
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct Magnifier {
    scale: Scale,
    table: &'static PatternTable,
    classifier: Classifier,
    wrap_x: bool,
    wrap_y: bool,
    parallel: bool,
}

impl Magnifier {
    /// Create a magnifier using the process-wide YUV cache.
    ///
    /// # Errors
    ///
    /// Returns [`HqxError::CacheNotInitialized`] unless [`yuv::init`] has run.
    pub fn new(config: &MagnifyConfig) -> Result<Self> {
        Ok(Self::with_cache(yuv::handle()?, config))
    }

    /// Create a magnifier around an explicit cache handle.
    pub fn with_cache(yuv: Arc<YuvTable>, config: &MagnifyConfig) -> Self {
        Self {
            scale: config.scale,
            table: PatternTable::for_scale(config.scale),
            classifier: Classifier::new(yuv, config.thresholds()),
            wrap_x: config.wrap_horizontal,
            wrap_y: config.wrap_vertical,
            parallel: config.parallel,
        }
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn factor(&self) -> usize {
        self.table.factor()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Output dimensions for a `width` × `height` source.
    ///
    /// # Errors
    ///
    /// Returns [`HqxError::DimensionOverflow`] if the output pixel count does
    /// not fit in `usize`.
    pub fn output_size(&self, width: usize, height: usize) -> Result<(usize, usize)> {
        let n = self.factor();
        let overflow = || HqxError::DimensionOverflow { width, height, factor: n };
        let out_w = width.checked_mul(n).ok_or_else(overflow)?;
        let out_h = height.checked_mul(n).ok_or_else(overflow)?;
        out_w.checked_mul(out_h).ok_or_else(overflow)?;
        Ok((out_w, out_h))
    }

    /// Magnify `src` into `dst`.
    ///
    /// `src` holds `width * height` pixels row-major. `dst` must hold at
    /// least `width*N * height*N` pixels; that prefix is fully overwritten
    /// and anything after it is left untouched.
    ///
    /// # Errors
    ///
    /// Fails without writing anything if either buffer is too short or the
    /// output size overflows.
    pub fn magnify(&self, src: &[u32], dst: &mut [u32], width: usize, height: usize) -> Result<()> {
        let required = self.check_buffers(src, dst, width, height)?;
        if required == 0 {
            return Ok(());
        }

        let n = self.factor();
        let band = width * n * n;
        debug!(width, height, factor = n, parallel = self.parallel, "magnifying");

        if self.parallel {
            dst[..required]
                .par_chunks_mut(band)
                .enumerate()
                .for_each(|(j, out)| self.magnify_row(src, width, height, j, out));
        } else {
            for (j, out) in dst[..required].chunks_mut(band).enumerate() {
                self.magnify_row(src, width, height, j, out);
            }
        }
        Ok(())
    }

    /// Magnify into a freshly allocated buffer.
    pub fn magnify_to_vec(&self, src: &[u32], width: usize, height: usize) -> Result<Vec<u32>> {
        let (out_w, out_h) = self.output_size(width, height)?;
        let mut dst = vec![0u32; out_w * out_h];
        self.magnify(src, &mut dst, width, height)?;
        Ok(dst)
    }

    /// Validate buffer lengths, returning the destination pixel count.
    fn check_buffers(&self, src: &[u32], dst: &[u32], width: usize, height: usize) -> Result<usize> {
        let n = self.factor();
        let expected_src = width
            .checked_mul(height)
            .ok_or(HqxError::DimensionOverflow { width, height, factor: n })?;
        if src.len() < expected_src {
            return Err(HqxError::SourceTooSmall {
                width,
                height,
                expected: expected_src,
                actual: src.len(),
            });
        }

        let (out_w, out_h) = self.output_size(width, height)?;
        let required = out_w * out_h;
        if dst.len() < required {
            return Err(HqxError::DestinationTooSmall {
                width,
                height,
                factor: n,
                expected: required,
                actual: dst.len(),
            });
        }
        Ok(required)
    }

    /// Fill the N destination rows produced by source row `j`.
    fn magnify_row(&self, src: &[u32], width: usize, height: usize, j: usize, out: &mut [u32]) {
        let n = self.factor();
        let stride = width * n;

        let row = j * width;
        let prev = if j > 0 {
            row - width
        } else if self.wrap_y {
            (height - 1) * width
        } else {
            row
        };
        let next = if j + 1 < height {
            row + width
        } else if self.wrap_y {
            0
        } else {
            row
        };

        for i in 0..width {
            let left = if i > 0 {
                i - 1
            } else if self.wrap_x {
                width - 1
            } else {
                i
            };
            let right = if i + 1 < width {
                i + 1
            } else if self.wrap_x {
                0
            } else {
                i
            };

            let w: Neighborhood = [
                src[prev + left],
                src[prev + i],
                src[prev + right],
                src[row + left],
                src[row + i],
                src[row + right],
                src[next + left],
                src[next + i],
                src[next + right],
            ];

            let pattern = self.classifier.classify(&w);
            let column = i * n;
            self.table.expand(
                pattern,
                &w,
                |a, b| self.classifier.differs(a, b),
                |cell, color| out[(cell / n) * stride + column + cell % n] = color,
            );
        }
    }
}

/// Magnify `src` into `dst` with a one-off [`Magnifier`].
///
/// Requires the YUV cache to be initialized with [`yuv::init`].
///
/// # Example
///
/// ```
/// use hqscale::{magnify, yuv, MagnifyConfig, Scale};
///
/// yuv::init();
/// let config = MagnifyConfig { scale: Scale::Hq3x, ..Default::default() };
/// let src = [0xFFFF0000u32; 4];
/// let mut dst = [0u32; 36];
/// magnify(&src, &mut dst, 2, 2, &config).unwrap();
/// assert!(dst.iter().all(|&c| c == 0xFFFF0000));
/// ```
pub fn magnify(
    src: &[u32],
    dst: &mut [u32],
    width: usize,
    height: usize,
    config: &MagnifyConfig,
) -> Result<()> {
    Magnifier::new(config)?.magnify(src, dst, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnifier(scale: Scale) -> Magnifier {
        let config = MagnifyConfig { scale, ..Default::default() };
        Magnifier::with_cache(yuv::init(), &config)
    }

    #[test]
    fn test_scale_factor() {
        assert_eq!(Scale::Hq3x.factor(), 3);
        assert_eq!(Scale::Hq4x.factor(), 4);
        assert_eq!(Scale::default(), Scale::Hq4x);
    }

    #[test]
    fn test_scale_display_and_parse() {
        for scale in [Scale::Hq3x, Scale::Hq4x] {
            assert_eq!(scale.to_string().parse::<Scale>(), Ok(scale));
        }
        assert_eq!("3x".parse::<Scale>(), Ok(Scale::Hq3x));
        assert_eq!("HQ4X".parse::<Scale>(), Ok(Scale::Hq4x));
        assert!("hq2x".parse::<Scale>().is_err());
    }

    #[test]
    fn test_output_size() {
        assert_eq!(magnifier(Scale::Hq3x).output_size(5, 2), Ok((15, 6)));
        assert_eq!(magnifier(Scale::Hq4x).output_size(5, 2), Ok((20, 8)));
    }

    #[test]
    fn test_output_size_overflow() {
        let err = magnifier(Scale::Hq4x).output_size(usize::MAX / 2, 1).unwrap_err();
        assert!(matches!(err, HqxError::DimensionOverflow { factor: 4, .. }));
    }

    #[test]
    fn test_rejects_short_source() {
        let m = magnifier(Scale::Hq3x);
        let mut dst = vec![0; 36];
        let err = m.magnify(&[0; 3], &mut dst, 2, 2).unwrap_err();
        assert_eq!(
            err,
            HqxError::SourceTooSmall { width: 2, height: 2, expected: 4, actual: 3 }
        );
    }

    #[test]
    fn test_rejects_short_destination_without_writing() {
        let m = magnifier(Scale::Hq4x);
        let mut dst = vec![7; 63];
        let err = m.magnify(&[0xFF000000; 4], &mut dst, 2, 2).unwrap_err();
        assert!(matches!(err, HqxError::DestinationTooSmall { expected: 64, actual: 63, .. }));
        assert!(dst.iter().all(|&c| c == 7));
    }

    #[test]
    fn test_longer_destination_keeps_tail() {
        let m = magnifier(Scale::Hq3x);
        let mut dst = vec![7; 40];
        m.magnify(&[0xFF00FF00; 4], &mut dst, 2, 2).unwrap();
        assert!(dst[..36].iter().all(|&c| c == 0xFF00FF00));
        assert_eq!(&dst[36..], &[7, 7, 7, 7]);
    }

    #[test]
    fn test_zero_dimensions_are_noop() {
        let m = magnifier(Scale::Hq4x);
        let mut dst: Vec<u32> = Vec::new();
        assert!(m.magnify(&[], &mut dst, 0, 5).is_ok());
        assert!(m.magnify(&[], &mut dst, 5, 0).is_ok());
        assert_eq!(m.magnify_to_vec(&[], 0, 0), Ok(Vec::new()));
    }

    #[test]
    fn test_single_pixel() {
        for scale in [Scale::Hq3x, Scale::Hq4x] {
            let out = magnifier(scale).magnify_to_vec(&[0x80402010], 1, 1).unwrap();
            assert_eq!(out.len(), scale.factor() * scale.factor());
            assert!(out.iter().all(|&c| c == 0x80402010));
        }
    }
}
