//! Integration tests for hq3x/hq4x magnification
//!
//! # Test Categories
//!
//! 1. **Scenarios** - Hand-checked outputs for small bitmaps
//! 2. **Properties** - Wrap, rotation, threshold and determinism invariants
//! 3. **Visual Regression** - SHA256 hashes of a pseudo-random sprite and a
//!    tile atlas that reaches every edge pattern

use hqscale::classify::NEIGHBOR_ORDER;
use hqscale::{
    scale_image, yuv, Classifier, Magnifier, MagnifyConfig, Neighborhood, Scale, Thresholds,
};
use image::RgbaImage;
use sha2::{Digest, Sha256};

const BLACK: u32 = 0xFF000000;
const WHITE: u32 = 0xFFFFFFFF;
const GREY: u32 = 0xFF7F7F7F;

/// Colors used for pseudo-random sprites. Includes two reds that sit inside
/// the default thresholds and two translucent entries.
const PALETTE: [u32; 10] = [
    0xFF7F7F7F, 0xFFFFFFFF, 0xFFE03030, 0xFFE83838, 0xFF3050C0, 0xFF30C050, 0x80FFFFFF,
    0x00000000, 0xFF000000, 0xFFF0D000,
];

// ============================================================================
// Test Utilities
// ============================================================================

fn magnifier(config: MagnifyConfig) -> Magnifier {
    Magnifier::with_cache(yuv::init(), &config)
}

fn config(scale: Scale) -> MagnifyConfig {
    MagnifyConfig { scale, ..Default::default() }
}

fn wrapped(scale: Scale, wrap_horizontal: bool, wrap_vertical: bool) -> MagnifyConfig {
    MagnifyConfig { scale, wrap_horizontal, wrap_vertical, ..Default::default() }
}

/// Deterministic sprite built from [`PALETTE`] with a 64-bit LCG.
fn lcg_sprite(width: usize, height: usize, seed: u64) -> Vec<u32> {
    let mut state = seed;
    (0..width * height)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            PALETTE[(state >> 33) as usize % PALETTE.len()]
        })
        .collect()
}

/// 32×16 tiles of 3×3 pixels, one per pattern and variant. Tile
/// `(p % 16 + 16 * variant, p / 16)` has a white center whose neighbors are
/// set for each bit of `p`: all black in variant 0, alternating black and
/// blue in variant 1 so diagonal tests see both outcomes.
fn pattern_atlas() -> (Vec<u32>, usize, usize) {
    const BLUE: u32 = 0xFF3050C0;
    let (width, height) = (32 * 3, 16 * 3);
    let mut pixels = vec![WHITE; width * height];
    for variant in 0..2 {
        for pattern in 0..256usize {
            let x0 = (pattern % 16 + 16 * variant) * 3;
            let y0 = (pattern / 16) * 3;
            for (bit, &index) in NEIGHBOR_ORDER.iter().enumerate() {
                if pattern >> bit & 1 == 1 {
                    let color = if variant == 1 && bit % 2 == 1 { BLUE } else { BLACK };
                    pixels[(y0 + index / 3) * width + x0 + index % 3] = color;
                }
            }
        }
    }
    (pixels, width, height)
}

fn to_image(pixels: &[u32], width: usize, height: usize) -> RgbaImage {
    let mut image = RgbaImage::new(width as u32, height as u32);
    for (px, &c) in image.pixels_mut().zip(pixels) {
        *px = hqscale::color::to_rgba(c);
    }
    image
}

/// Calculate SHA256 hash of image pixels for deterministic verification.
fn hash_image(image: &RgbaImage) -> String {
    let mut hasher = Sha256::new();
    hasher.update(image.as_raw());
    format!("{:x}", hasher.finalize())
}

/// The N×N block written for source pixel (x, y).
fn block(out: &[u32], width: usize, n: usize, x: usize, y: usize) -> Vec<Vec<u32>> {
    let stride = width * n;
    (0..n)
        .map(|r| (0..n).map(|c| out[(y * n + r) * stride + x * n + c]).collect())
        .collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_uniform_red_3x() {
    let src = [0xFFFF0000; 4];
    let mut dst = [0u32; 36];
    magnifier(config(Scale::Hq3x)).magnify(&src, &mut dst, 2, 2).unwrap();
    assert!(dst.iter().all(|&c| c == 0xFFFF0000));
}

#[test]
fn test_uniform_colors_every_scale() {
    for scale in [Scale::Hq3x, Scale::Hq4x] {
        for &color in &PALETTE {
            let out = magnifier(config(scale)).magnify_to_vec(&[color; 12], 4, 3).unwrap();
            assert!(out.iter().all(|&c| c == color), "{} {:08X}", scale, color);
        }
    }
}

#[test]
fn test_isolated_point_3x() {
    let mut src = [BLACK; 9];
    src[4] = WHITE;
    let out = magnifier(config(Scale::Hq3x)).magnify_to_vec(&src, 3, 3).unwrap();

    // pattern 255 with no secondary differences: corners blend 2:1:1 toward
    // the two black side neighbors, edges and center stay white
    assert_eq!(
        block(&out, 3, 3, 1, 1),
        vec![vec![GREY, WHITE, GREY], vec![WHITE, WHITE, WHITE], vec![GREY, WHITE, GREY]]
    );
}

#[test]
fn test_isolated_point_4x() {
    let mut src = [BLACK; 9];
    src[4] = WHITE;
    let out = magnifier(config(Scale::Hq4x)).magnify_to_vec(&src, 3, 3).unwrap();
    assert_eq!(
        block(&out, 3, 4, 1, 1),
        vec![
            vec![GREY, WHITE, WHITE, GREY],
            vec![WHITE, WHITE, WHITE, WHITE],
            vec![WHITE, WHITE, WHITE, WHITE],
            vec![GREY, WHITE, WHITE, GREY],
        ]
    );
}

#[test]
fn test_checkerboard_3x_golden() {
    let src = [WHITE, BLACK, BLACK, WHITE];
    let out = magnifier(config(Scale::Hq3x)).magnify_to_vec(&src, 2, 2).unwrap();

    #[rustfmt::skip]
    let expected: [u32; 36] = [
        WHITE, WHITE, WHITE, BLACK, BLACK, BLACK,
        WHITE, WHITE, WHITE, BLACK, BLACK, BLACK,
        WHITE, WHITE, GREY,  GREY,  BLACK, BLACK,
        BLACK, BLACK, GREY,  GREY,  WHITE, WHITE,
        BLACK, BLACK, BLACK, WHITE, WHITE, WHITE,
        BLACK, BLACK, BLACK, WHITE, WHITE, WHITE,
    ];
    assert_eq!(out, expected);
}

#[test]
fn test_checkerboard_4x_golden() {
    const LIGHT: u32 = 0xFFBFBFBF;
    const DARK: u32 = 0xFF3F3F3F;

    let src = [WHITE, BLACK, BLACK, WHITE];
    let out = magnifier(config(Scale::Hq4x)).magnify_to_vec(&src, 2, 2).unwrap();

    #[rustfmt::skip]
    let expected: [u32; 64] = [
        WHITE, WHITE, WHITE, WHITE, BLACK, BLACK, BLACK, BLACK,
        WHITE, WHITE, WHITE, WHITE, BLACK, BLACK, BLACK, BLACK,
        WHITE, WHITE, WHITE, LIGHT, DARK,  BLACK, BLACK, BLACK,
        WHITE, WHITE, LIGHT, GREY,  GREY,  DARK,  BLACK, BLACK,
        BLACK, BLACK, DARK,  GREY,  GREY,  LIGHT, WHITE, WHITE,
        BLACK, BLACK, BLACK, DARK,  LIGHT, WHITE, WHITE, WHITE,
        BLACK, BLACK, BLACK, BLACK, WHITE, WHITE, WHITE, WHITE,
        BLACK, BLACK, BLACK, BLACK, WHITE, WHITE, WHITE, WHITE,
    ];
    assert_eq!(out, expected);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_every_destination_pixel_is_written() {
    let src = lcg_sprite(7, 5, 11);
    for scale in [Scale::Hq3x, Scale::Hq4x] {
        let m = magnifier(config(scale));
        let len = 7 * 5 * scale.factor() * scale.factor();
        let mut zeros = vec![0u32; len];
        let mut ones = vec![u32::MAX; len];
        m.magnify(&src, &mut zeros, 7, 5).unwrap();
        m.magnify(&src, &mut ones, 7, 5).unwrap();
        assert_eq!(zeros, ones);
    }
}

#[test]
fn test_deterministic_output() {
    let src = lcg_sprite(9, 6, 3);
    for scale in [Scale::Hq3x, Scale::Hq4x] {
        let m = magnifier(config(scale));
        let first = m.magnify_to_vec(&src, 9, 6).unwrap();
        let second = m.magnify_to_vec(&src, 9, 6).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let src = lcg_sprite(13, 9, 21);
    for scale in [Scale::Hq3x, Scale::Hq4x] {
        for wrap in [false, true] {
            let base = wrapped(scale, wrap, wrap);
            let sequential = magnifier(base.clone()).magnify_to_vec(&src, 13, 9).unwrap();
            let parallel = magnifier(MagnifyConfig { parallel: true, ..base })
                .magnify_to_vec(&src, 13, 9)
                .unwrap();
            assert_eq!(sequential, parallel);
        }
    }
}

#[test]
fn test_horizontal_wrap_commutes_with_column_shift() {
    const W: usize = 5;
    const H: usize = 4;
    const SHIFT: usize = 2;

    for seed in 0..20 {
        let src = lcg_sprite(W, H, seed);
        let shifted: Vec<u32> =
            (0..W * H).map(|i| src[(i / W) * W + (i % W + SHIFT) % W]).collect();

        for scale in [Scale::Hq3x, Scale::Hq4x] {
            for wrap_vertical in [false, true] {
                let m = magnifier(wrapped(scale, true, wrap_vertical));
                let n = scale.factor();
                let out = m.magnify_to_vec(&src, W, H).unwrap();
                let out_shifted = m.magnify_to_vec(&shifted, W, H).unwrap();

                let stride = W * n;
                let expected: Vec<u32> = (0..out.len())
                    .map(|i| out[(i / stride) * stride + (i % stride + SHIFT * n) % stride])
                    .collect();
                assert_eq!(out_shifted, expected, "seed {} {}", seed, scale);
            }
        }
    }
}

#[test]
fn test_vertical_wrap_commutes_with_row_shift() {
    const W: usize = 5;
    const H: usize = 4;

    for seed in 0..20 {
        let src = lcg_sprite(W, H, seed);
        let shifted: Vec<u32> = (0..W * H).map(|i| src[((i / W + 1) % H) * W + i % W]).collect();

        for scale in [Scale::Hq3x, Scale::Hq4x] {
            let m = magnifier(wrapped(scale, true, true));
            let n = scale.factor();
            let out = m.magnify_to_vec(&src, W, H).unwrap();
            let out_shifted = m.magnify_to_vec(&shifted, W, H).unwrap();

            let stride = W * n;
            let rows = H * n;
            let expected: Vec<u32> = (0..out.len())
                .map(|i| out[((i / stride + n) % rows) * stride + i % stride])
                .collect();
            assert_eq!(out_shifted, expected, "seed {} {}", seed, scale);
        }
    }
}

#[test]
fn test_horizontal_wrap_only_touches_border_columns() {
    const W: usize = 5;
    const H: usize = 4;
    let src = lcg_sprite(W, H, 0);
    let n = 4;
    let clamped = magnifier(wrapped(Scale::Hq4x, false, false)).magnify_to_vec(&src, W, H).unwrap();
    let wrapping = magnifier(wrapped(Scale::Hq4x, true, false)).magnify_to_vec(&src, W, H).unwrap();

    let stride = W * n;
    let changed: Vec<usize> = (0..clamped.len()).filter(|&i| clamped[i] != wrapping[i]).collect();
    assert!(!changed.is_empty());
    for i in changed {
        let column = i % stride;
        assert!(column < n || column >= stride - n, "pixel {} changed", i);
    }
}

#[test]
fn test_clamped_edges_sample_own_row_and_column() {
    // A single row without wrap sees itself above and below, so a 1-pixel-high
    // strip behaves like the same strip stacked three times.
    let strip = lcg_sprite(6, 1, 5);
    let stacked: Vec<u32> = strip.iter().chain(&strip).chain(&strip).copied().collect();

    for scale in [Scale::Hq3x, Scale::Hq4x] {
        let m = magnifier(config(scale));
        let n = scale.factor();
        let single = m.magnify_to_vec(&strip, 6, 1).unwrap();
        let triple = m.magnify_to_vec(&stacked, 6, 3).unwrap();
        let stride = 6 * n;
        // middle row of the stack has the same neighborhoods as the strip
        assert_eq!(single, triple[n * stride..2 * n * stride].to_vec());
    }
}

#[test]
fn test_rotation_symmetry() {
    // rotating a 3x3 source a quarter turn rotates the center block with it
    for seed in 0..400 {
        let src = lcg_sprite(3, 3, seed);
        let rotated: Vec<u32> = (0..9).map(|i| src[(2 - i % 3) * 3 + i / 3]).collect();

        for scale in [Scale::Hq3x, Scale::Hq4x] {
            let m = magnifier(config(scale));
            let n = scale.factor();
            let a = block(&m.magnify_to_vec(&src, 3, 3).unwrap(), 3, n, 1, 1);
            let b = block(&m.magnify_to_vec(&rotated, 3, 3).unwrap(), 3, n, 1, 1);
            let a_rotated: Vec<Vec<u32>> =
                (0..n).map(|r| (0..n).map(|c| a[n - 1 - c][r]).collect()).collect();
            assert_eq!(a_rotated, b, "seed {} {}", seed, scale);
        }
    }
}

#[test]
fn test_threshold_monotonicity() {
    let cache = yuv::init();
    let loose = [
        Thresholds::new(48, 7, 6, 0),
        Thresholds::new(60, 7, 6, 0),
        Thresholds::new(48, 20, 6, 0),
        Thresholds::new(48, 7, 30, 0),
        Thresholds::new(48, 7, 6, 200),
        Thresholds::new(255, 255, 255, 255),
    ];
    let strict = Classifier::new(cache.clone(), Thresholds::new(10, 2, 2, 0));

    for seed in 0..200 {
        let pixels = lcg_sprite(3, 3, seed);
        let mut w: Neighborhood = [0; 9];
        w.copy_from_slice(&pixels);
        let base = strict.classify(&w);
        for t in loose {
            let relaxed = Classifier::new(cache.clone(), t).classify(&w);
            assert_eq!(relaxed & !base, 0, "seed {} {:?}", seed, t);
        }
        assert_eq!(Classifier::new(cache.clone(), Thresholds::new(255, 255, 255, 255)).classify(&w), 0);
    }
}

// ============================================================================
// Visual Regression
// ============================================================================

#[test]
fn test_sprite_hashes() {
    yuv::init();
    let image = to_image(&lcg_sprite(16, 12, 7), 16, 12);
    let cases = [
        (Scale::Hq3x, false, "ec8010566421381dc16abfe3a119b7575cbd5b61dc56b8fe538e25b90b2a1b79"),
        (Scale::Hq3x, true, "5977bad2af540cdd25d8a030a1f6f61a0d4268e7076c1802ac6f305dc24e68a8"),
        (Scale::Hq4x, false, "ef0e9030597bc4b061bc8e03221b92c0ec1726d8251fdbb95630e6d7c3d1568c"),
        (Scale::Hq4x, true, "49c1600d26e2583963b08feb763960f688c0f3327a78da3e34d61f4dbde66ceb"),
    ];
    for (scale, wrap, expected) in cases {
        let scaled = scale_image(&image, &wrapped(scale, wrap, wrap)).unwrap();
        assert_eq!(scaled.dimensions(), (16 * scale.factor() as u32, 12 * scale.factor() as u32));
        assert_eq!(hash_image(&scaled), expected, "{} wrap={}", scale, wrap);
    }
}

#[test]
fn test_pattern_atlas_reaches_every_pattern() {
    let (pixels, width, _) = pattern_atlas();
    let classifier = Classifier::new(yuv::init(), Thresholds::default());
    for ty in 0..16 {
        for tx in 0..32 {
            let (cx, cy) = (tx * 3 + 1, ty * 3 + 1);
            let mut w: Neighborhood = [0; 9];
            for (i, px) in w.iter_mut().enumerate() {
                *px = pixels[(cy + i / 3 - 1) * width + cx + i % 3 - 1];
            }
            assert_eq!(classifier.classify(&w) as usize, tx % 16 + 16 * ty, "tile ({}, {})", tx, ty);
        }
    }
}

#[test]
fn test_pattern_atlas_hashes() {
    yuv::init();
    let (pixels, width, height) = pattern_atlas();
    let image = to_image(&pixels, width, height);
    let cases = [
        (Scale::Hq3x, "bba793ae159f1d0992d24a82a90ebfde29b58abd6646fe2bf816b0f363fbb237"),
        (Scale::Hq4x, "cab175eddfaa2a580a62778f94c8a92f32dfee7b818925ce39aecf5d08465de5"),
    ];
    for (scale, expected) in cases {
        let scaled = scale_image(&image, &config(scale)).unwrap();
        assert_eq!(hash_image(&scaled), expected, "{}", scale);
    }
}
