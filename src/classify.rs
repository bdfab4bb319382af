//! Neighbor difference classification.
//!
//! Each source pixel is compared against its eight neighbors in YUV space.
//! Neighbors that differ beyond the configured thresholds set one bit of an
//! 8-bit edge pattern, which then selects the output program in the pattern
//! table.
//!
//! Neighborhood layout (index 4 is the center):
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```

use crate::yuv::YuvTable;
use std::sync::Arc;

/// A 3x3 block of packed colors around a source pixel, row-major.
pub type Neighborhood = [u32; 9];

/// Index of the center pixel within a [`Neighborhood`].
pub const CENTER: usize = 4;

/// Neighborhood index for each pattern bit, lowest bit first.
pub const NEIGHBOR_ORDER: [usize; 8] = [0, 1, 2, 3, 5, 6, 7, 8];

const Y_MASK: u32 = 0x00FF_0000;
const U_MASK: u32 = 0x0000_FF00;
const V_MASK: u32 = 0x0000_00FF;

/// Default luma threshold.
pub const DEFAULT_Y_THRESHOLD: u32 = 48;
/// Default U chroma threshold.
pub const DEFAULT_U_THRESHOLD: u32 = 7;
/// Default V chroma threshold.
pub const DEFAULT_V_THRESHOLD: u32 = 6;
/// Default alpha threshold.
pub const DEFAULT_ALPHA_THRESHOLD: u32 = 0;

/// Difference thresholds, stored in the byte position they are compared at.
///
/// Y is kept shifted left by 16 and U by 8 so a packed YUV difference can be
/// compared without unpacking each channel per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    y: u32,
    u: u32,
    v: u32,
    alpha: u32,
}

impl Thresholds {
    /// Build thresholds from plain channel values.
    ///
    /// Values above 255 behave like 255: no byte difference can exceed them.
    pub fn new(y: u32, u: u32, v: u32, alpha: u32) -> Self {
        Self {
            y: y.min(0xFF) << 16,
            u: u.min(0xFF) << 8,
            v,
            alpha,
        }
    }

    /// Luma threshold in its unshifted form.
    pub fn luma(&self) -> u32 {
        self.y >> 16
    }

    /// U chroma threshold in its unshifted form.
    pub fn chroma_u(&self) -> u32 {
        self.u >> 8
    }

    pub fn chroma_v(&self) -> u32 {
        self.v
    }

    pub fn alpha(&self) -> u32 {
        self.alpha
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(
            DEFAULT_Y_THRESHOLD,
            DEFAULT_U_THRESHOLD,
            DEFAULT_V_THRESHOLD,
            DEFAULT_ALPHA_THRESHOLD,
        )
    }
}

/// Compares colors against a shared YUV cache.
#[derive(Debug, Clone)]
pub struct Classifier {
    yuv: Arc<YuvTable>,
    thresholds: Thresholds,
}

impl Classifier {
    pub fn new(yuv: Arc<YuvTable>, thresholds: Thresholds) -> Self {
        Self { yuv, thresholds }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Returns `true` when two colors are perceptually distinct.
    ///
    /// Any channel exceeding its threshold is enough. Alpha is taken from the
    /// top byte by an arithmetic shift of the signed word, so alpha bytes of
    /// 0x80 and above compare as negative values (opaque is -1).
    #[inline]
    pub fn differs(&self, c1: u32, c2: u32) -> bool {
        let yuv1 = self.yuv.lookup(c1);
        let yuv2 = self.yuv.lookup(c2);
        let t = &self.thresholds;

        (yuv1 & Y_MASK).abs_diff(yuv2 & Y_MASK) > t.y
            || (yuv1 & U_MASK).abs_diff(yuv2 & U_MASK) > t.u
            || (yuv1 & V_MASK).abs_diff(yuv2 & V_MASK) > t.v
            || ((c1 as i32) >> 24).abs_diff((c2 as i32) >> 24) > t.alpha
    }

    /// Compute the 8-bit edge pattern of a neighborhood.
    ///
    /// Bit `k` is set when `w[NEIGHBOR_ORDER[k]]` differs from the center.
    /// Neighbors bit-identical to the center skip the YUV comparison.
    #[inline]
    pub fn classify(&self, w: &Neighborhood) -> u8 {
        let center = w[CENTER];
        let mut pattern = 0u8;
        for (bit, &index) in NEIGHBOR_ORDER.iter().enumerate() {
            let neighbor = w[index];
            if neighbor != center && self.differs(center, neighbor) {
                pattern |= 1 << bit;
            }
        }
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yuv;

    fn classifier(thresholds: Thresholds) -> Classifier {
        Classifier::new(yuv::init(), thresholds)
    }

    #[test]
    fn test_thresholds_are_pre_shifted() {
        let t = Thresholds::new(48, 7, 6, 3);
        assert_eq!(t.y, 48 << 16);
        assert_eq!(t.u, 7 << 8);
        assert_eq!(t.v, 6);
        assert_eq!(t.alpha, 3);
        assert_eq!((t.luma(), t.chroma_u(), t.chroma_v(), t.alpha()), (48, 7, 6, 3));
    }

    #[test]
    fn test_thresholds_clamp_to_a_byte() {
        let t = Thresholds::new(1_000_000, 300, 6, 0);
        assert_eq!(t.luma(), 255);
        assert_eq!(t.chroma_u(), 255);
    }

    #[test]
    fn test_default_thresholds() {
        let t = Thresholds::default();
        assert_eq!((t.luma(), t.chroma_u(), t.chroma_v(), t.alpha()), (48, 7, 6, 0));
    }

    #[test]
    fn test_differs_identical() {
        let c = classifier(Thresholds::default());
        assert!(!c.differs(0xFF123456, 0xFF123456));
    }

    #[test]
    fn test_differs_black_white() {
        let c = classifier(Thresholds::default());
        assert!(c.differs(0xFF000000, 0xFFFFFFFF));
        assert!(c.differs(0xFFFFFFFF, 0xFF000000));
    }

    #[test]
    fn test_differs_close_reds_are_similar() {
        // YUV (100, 99, 216) vs (108, 99, 216)
        let c = classifier(Thresholds::default());
        assert!(!c.differs(0xFFE03030, 0xFFE83838));
    }

    #[test]
    fn test_differs_on_alpha_only() {
        let c = classifier(Thresholds::default());
        assert!(c.differs(0xFFFFFFFF, 0x80FFFFFF));

        // -1 against -128
        let tolerant = classifier(Thresholds::new(48, 7, 6, 0x80));
        assert!(!tolerant.differs(0xFFFFFFFF, 0x80FFFFFF));
        let strict = classifier(Thresholds::new(48, 7, 6, 0x7E));
        assert!(strict.differs(0xFFFFFFFF, 0x80FFFFFF));
    }

    #[test]
    fn test_alpha_difference_is_signed() {
        // 0x80 is -128 and 0x7F is 127, a distance of 255
        let c = classifier(Thresholds::new(48, 7, 6, 200));
        assert!(c.differs(0x80000000, 0x7F000000));
        assert!(!c.differs(0x80000000, 0xFF000000));

        // opaque (-1) and fully transparent (0) are one step apart
        let c = classifier(Thresholds::new(48, 7, 6, 5));
        assert!(!c.differs(0xFF000000, 0x00000000));
        assert!(!c.differs(0xFFFFFFFF, 0x00FFFFFF));
        assert!(c.differs(0xFF000000, 0x7F000000));
    }

    #[test]
    fn test_differs_on_chroma_v() {
        // red and green share little luma difference but V differs by 233
        let c = classifier(Thresholds::new(255, 255, 6, 0));
        assert!(c.differs(0xFFFF0000, 0xFF00FF00));
        let blind = classifier(Thresholds::new(255, 255, 255, 0));
        assert!(!blind.differs(0xFFFF0000, 0xFF00FF00));
    }

    #[test]
    fn test_classify_uniform_is_zero() {
        let c = classifier(Thresholds::default());
        assert_eq!(c.classify(&[0xFFFF0000; 9]), 0);
    }

    #[test]
    fn test_classify_isolated_point() {
        let c = classifier(Thresholds::default());
        let mut w = [0xFF000000; 9];
        w[CENTER] = 0xFFFFFFFF;
        assert_eq!(c.classify(&w), 0xFF);
    }

    #[test]
    fn test_classify_bit_order() {
        let c = classifier(Thresholds::default());
        for (bit, &index) in NEIGHBOR_ORDER.iter().enumerate() {
            let mut w = [0xFF000000; 9];
            w[index] = 0xFFFFFFFF;
            assert_eq!(c.classify(&w), 1 << bit, "neighbor {}", index);
        }
    }

    #[test]
    fn test_classify_ignores_center_index() {
        let c = classifier(Thresholds::default());
        let w = [
            0xFFFFFFFF, 0xFF000000, 0xFFFFFFFF, //
            0xFF000000, 0xFF000000, 0xFF000000, //
            0xFFFFFFFF, 0xFF000000, 0xFFFFFFFF,
        ];
        assert_eq!(c.classify(&w), 0b1010_0101);
    }
}
