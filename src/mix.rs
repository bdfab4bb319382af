//! Weighted color blending on packed ARGB values.
//!
//! Every blend works on three channel groups at once: green alone, red and
//! blue together under one mask (their weighted sums cannot carry into each
//! other), and alpha shifted down before weighting so the sum stays within
//! 32 bits. Weights always add up to `1 << shift`, and the division is a
//! plain truncating shift. Output must stay bit-identical to the reference
//! filter, so none of this is rewritten into per-channel float math.
//!
//! The alpha shift is arithmetic on the signed word. An alpha byte of 0x80
//! or above therefore sign-extends before weighting, which is what the
//! reference filter does with its 32-bit signed pixels.

const MASK_GREEN: u32 = 0x0000_FF00;
const MASK_RED_BLUE: u32 = 0x00FF_00FF;
const MASK_ALPHA: u32 = 0xFF00_0000;

/// Weighted alpha of one input. Never overflows: weights sum to `1 << shift`.
#[inline(always)]
fn alpha(c: u32, w: u32, shift: u32) -> i32 {
    (((c & MASK_ALPHA) as i32) >> shift) * w as i32
}

#[inline(always)]
fn blend2(c1: u32, w1: u32, c2: u32, w2: u32, shift: u32) -> u32 {
    if c1 == c2 {
        return c1;
    }
    ((((c1 & MASK_GREEN) * w1 + (c2 & MASK_GREEN) * w2) >> shift) & MASK_GREEN)
        | ((((c1 & MASK_RED_BLUE) * w1 + (c2 & MASK_RED_BLUE) * w2) >> shift) & MASK_RED_BLUE)
        | ((alpha(c1, w1, shift) + alpha(c2, w2, shift)) as u32 & MASK_ALPHA)
}

#[inline(always)]
fn blend3(c1: u32, w1: u32, c2: u32, w2: u32, c3: u32, w3: u32, shift: u32) -> u32 {
    ((((c1 & MASK_GREEN) * w1 + (c2 & MASK_GREEN) * w2 + (c3 & MASK_GREEN) * w3) >> shift)
        & MASK_GREEN)
        | ((((c1 & MASK_RED_BLUE) * w1 + (c2 & MASK_RED_BLUE) * w2 + (c3 & MASK_RED_BLUE) * w3)
            >> shift)
            & MASK_RED_BLUE)
        | ((alpha(c1, w1, shift) + alpha(c2, w2, shift) + alpha(c3, w3, shift)) as u32
            & MASK_ALPHA)
}

/// `(3*c1 + c2) / 4`
#[inline]
pub fn mix_3_to_1(c1: u32, c2: u32) -> u32 {
    blend2(c1, 3, c2, 1, 2)
}

/// `(2*c1 + c2 + c3) / 4`
#[inline]
pub fn mix_2_to_1_to_1(c1: u32, c2: u32, c3: u32) -> u32 {
    blend3(c1, 2, c2, 1, c3, 1, 2)
}

/// `(7*c1 + c2) / 8`
#[inline]
pub fn mix_7_to_1(c1: u32, c2: u32) -> u32 {
    blend2(c1, 7, c2, 1, 3)
}

/// `(2*c1 + 7*c2 + 7*c3) / 16`
#[inline]
pub fn mix_2_to_7_to_7(c1: u32, c2: u32, c3: u32) -> u32 {
    blend3(c1, 2, c2, 7, c3, 7, 4)
}

/// `(c1 + c2) / 2`
#[inline]
pub fn mix_even(c1: u32, c2: u32) -> u32 {
    blend2(c1, 1, c2, 1, 1)
}

/// `(5*c1 + 2*c2 + c3) / 8`
#[inline]
pub fn mix_5_to_2_to_1(c1: u32, c2: u32, c3: u32) -> u32 {
    blend3(c1, 5, c2, 2, c3, 1, 3)
}

/// `(6*c1 + c2 + c3) / 8`
#[inline]
pub fn mix_6_to_1_to_1(c1: u32, c2: u32, c3: u32) -> u32 {
    blend3(c1, 6, c2, 1, c3, 1, 3)
}

/// `(5*c1 + 3*c2) / 8`
#[inline]
pub fn mix_5_to_3(c1: u32, c2: u32) -> u32 {
    blend2(c1, 5, c2, 3, 3)
}

/// `(2*c1 + 3*c2 + 3*c3) / 8`
#[inline]
pub fn mix_2_to_3_to_3(c1: u32, c2: u32, c3: u32) -> u32 {
    blend3(c1, 2, c2, 3, c3, 3, 3)
}

/// `(14*c1 + c2 + c3) / 16`
#[inline]
pub fn mix_14_to_1_to_1(c1: u32, c2: u32, c3: u32) -> u32 {
    blend3(c1, 14, c2, 1, c3, 1, 4)
}

/// Two-color blends, named by their weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blend2 {
    ThreeToOne,
    SevenToOne,
    Even,
    FiveToThree,
}

impl Blend2 {
    #[inline]
    pub fn apply(self, c1: u32, c2: u32) -> u32 {
        match self {
            Blend2::ThreeToOne => mix_3_to_1(c1, c2),
            Blend2::SevenToOne => mix_7_to_1(c1, c2),
            Blend2::Even => mix_even(c1, c2),
            Blend2::FiveToThree => mix_5_to_3(c1, c2),
        }
    }
}

/// Three-color blends, named by their weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blend3 {
    TwoToOneToOne,
    TwoToSevenToSeven,
    FiveToTwoToOne,
    SixToOneToOne,
    TwoToThreeToThree,
    FourteenToOneToOne,
}

impl Blend3 {
    #[inline]
    pub fn apply(self, c1: u32, c2: u32, c3: u32) -> u32 {
        match self {
            Blend3::TwoToOneToOne => mix_2_to_1_to_1(c1, c2, c3),
            Blend3::TwoToSevenToSeven => mix_2_to_7_to_7(c1, c2, c3),
            Blend3::FiveToTwoToOne => mix_5_to_2_to_1(c1, c2, c3),
            Blend3::SixToOneToOne => mix_6_to_1_to_1(c1, c2, c3),
            Blend3::TwoToThreeToThree => mix_2_to_3_to_3(c1, c2, c3),
            Blend3::FourteenToOneToOne => mix_14_to_1_to_1(c1, c2, c3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLEND2: [Blend2; 4] = [
        Blend2::ThreeToOne,
        Blend2::SevenToOne,
        Blend2::Even,
        Blend2::FiveToThree,
    ];

    const BLEND3: [Blend3; 6] = [
        Blend3::TwoToOneToOne,
        Blend3::TwoToSevenToSeven,
        Blend3::FiveToTwoToOne,
        Blend3::SixToOneToOne,
        Blend3::TwoToThreeToThree,
        Blend3::FourteenToOneToOne,
    ];

    const SAMPLES: [u32; 6] = [
        0x00000000, 0xFFFFFFFF, 0xFFFF0000, 0x80123456, 0x7F7F7F7F, 0xFF00FF00,
    ];

    /// Weights applied to the first and second color.
    fn weights2(blend: Blend2) -> [u32; 2] {
        match blend {
            Blend2::ThreeToOne => [3, 1],
            Blend2::SevenToOne => [7, 1],
            Blend2::Even => [1, 1],
            Blend2::FiveToThree => [5, 3],
        }
    }

    fn weights3(blend: Blend3) -> [u32; 3] {
        match blend {
            Blend3::TwoToOneToOne => [2, 1, 1],
            Blend3::TwoToSevenToSeven => [2, 7, 7],
            Blend3::FiveToTwoToOne => [5, 2, 1],
            Blend3::SixToOneToOne => [6, 1, 1],
            Blend3::TwoToThreeToThree => [2, 3, 3],
            Blend3::FourteenToOneToOne => [14, 1, 1],
        }
    }

    /// Per-channel reference: weighted sum of each byte, truncated.
    fn reference(colors: &[u32], weights: &[u32]) -> u32 {
        let total: u32 = weights.iter().sum();
        let mut out = 0;
        for shift in [0, 8, 16] {
            let sum: u32 = colors
                .iter()
                .zip(weights)
                .map(|(c, w)| ((c >> shift) & 0xFF) * w)
                .sum();
            out |= (sum / total) << shift;
        }
        // alpha is shifted down as a signed word before weighting
        let bits = total.trailing_zeros();
        let alpha: i32 = colors
            .iter()
            .zip(weights)
            .map(|(&c, &w)| (((c & MASK_ALPHA) as i32) >> bits) * w as i32)
            .sum();
        out | (alpha as u32 & MASK_ALPHA)
    }

    #[test]
    fn test_identity_two_inputs() {
        for blend in BLEND2 {
            for c in SAMPLES {
                assert_eq!(blend.apply(c, c), c, "{:?} {:08X}", blend, c);
            }
        }
    }

    #[test]
    fn test_identity_three_inputs() {
        for blend in BLEND3 {
            for c in SAMPLES {
                assert_eq!(blend.apply(c, c, c), c, "{:?} {:08X}", blend, c);
            }
        }
    }

    #[test]
    fn test_weights_sum_to_power_of_two() {
        for blend in BLEND2 {
            assert!(weights2(blend).iter().sum::<u32>().is_power_of_two());
        }
        for blend in BLEND3 {
            assert!(weights3(blend).iter().sum::<u32>().is_power_of_two());
        }
    }

    #[test]
    fn test_two_input_matches_channel_reference() {
        for blend in BLEND2 {
            for a in SAMPLES {
                for b in SAMPLES {
                    if a == b {
                        continue;
                    }
                    assert_eq!(
                        blend.apply(a, b),
                        reference(&[a, b], &weights2(blend)),
                        "{:?} {:08X} {:08X}",
                        blend,
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_three_input_matches_channel_reference() {
        for blend in BLEND3 {
            for a in SAMPLES {
                for b in SAMPLES {
                    for c in SAMPLES {
                        assert_eq!(
                            blend.apply(a, b, c),
                            reference(&[a, b, c], &weights3(blend)),
                            "{:?} {:08X} {:08X} {:08X}",
                            blend,
                            a,
                            b,
                            c
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_mix_even_black_white() {
        assert_eq!(mix_even(0xFFFFFFFF, 0xFF000000), 0xFF7F7F7F);
    }

    #[test]
    fn test_mix_3_to_1_truncates() {
        // green: (3 * 0x10 + 0x13) / 4 = 0x43 / 4 = 0x10
        assert_eq!(mix_3_to_1(0xFF001000, 0xFF001300), 0xFF001000);
        // (3 * 0xFF + 0) / 4 = 0xBF
        assert_eq!(mix_3_to_1(0xFFFFFFFF, 0xFF000000), 0xFFBFBFBF);
    }

    #[test]
    fn test_alpha_shift_keeps_sign() {
        // 0xFF000000 >> 1 sign-extends to 0xFF800000
        assert_eq!(mix_even(0xFF000000, 0x00000000), 0xFF000000);
        assert_eq!(mix_even(0x80000000, 0x00000000), 0xC0000000);
        assert_eq!(mix_even(0x7F000000, 0x00000000), 0x3F000000);
        assert_eq!(mix_3_to_1(0x00000000, 0xFF000000), 0xFF000000);
    }

    #[test]
    fn test_half_transparent_pair() {
        // 0xC0000000 + 0x3F800000 carries into a fully opaque alpha
        assert_eq!(mix_even(0x80FFFFFF, 0x7F000000), 0xFF7F7F7F);
    }

    #[test]
    fn test_red_and_blue_do_not_bleed() {
        let c = mix_14_to_1_to_1(0x00FF00FF, 0x00000000, 0x00000000);
        assert_eq!(c, 0x00DF00DF);
    }
}
