//! hqscale - hq3x/hq4x pixel-art magnification
//!
//! This library provides:
//! - A process-wide RGB to YUV cache with explicit [`yuv::init`] / [`yuv::deinit`]
//! - Edge classification of each pixel's 3x3 neighborhood
//! - Bit-exact packed-color blending
//! - Data-driven 256-entry pattern tables for 3x and 4x output
//!
//! # Example
//!
//! ```
//! use hqscale::{yuv, Magnifier, MagnifyConfig, Scale};
//!
//! yuv::init();
//! let config = MagnifyConfig { scale: Scale::Hq3x, ..Default::default() };
//! let magnifier = Magnifier::new(&config).unwrap();
//!
//! let src = [0xFF000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFF000000];
//! let out = magnifier.magnify_to_vec(&src, 2, 2).unwrap();
//! assert_eq!(out.len(), 6 * 6);
//! ```

pub mod classify;
pub mod color;
pub mod config;
pub mod error;
pub mod magnify;
pub mod mix;
pub mod rgba;
pub mod table;
pub mod yuv;

pub use classify::{Classifier, Neighborhood, Thresholds};
pub use config::{ConfigError, MagnifyConfig};
pub use error::{HqxError, Result};
pub use magnify::{magnify, Magnifier, Scale};
pub use rgba::{scale_image, scale_image_with};
pub use table::PatternTable;
