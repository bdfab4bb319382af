//! Process-wide RGB to YUV lookup cache.
//!
//! The classifier compares colors in YUV space. Converting on every
//! comparison is wasteful, so the full 24-bit RGB cube is converted once into
//! a 64 MiB table. The table is global state with an explicit lifecycle:
//!
//! - [`init`] builds it (once) and hands back a shared handle
//! - [`handle`] fetches the handle, failing if the cache is not built
//! - [`deinit`] drops the global handle
//!
//! Magnifiers hold their own [`Arc`], so tearing the cache down while a
//! magnification runs only releases memory once that run finishes.

use crate::color::RGB_MASK;
use crate::error::{HqxError, Result};
use rayon::prelude::*;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;
use tracing::debug;

/// Number of entries in the cache, one per 24-bit RGB value.
pub const TABLE_LEN: usize = 1 << 24;

/// Rows of the RGB cube handed to each rayon task while building.
const BUILD_CHUNK: usize = 1 << 16;

static CACHE: RwLock<Option<Arc<YuvTable>>> = RwLock::new(None);

/// Convert a 24-bit RGB value to packed `0x00YYUUVV`.
///
/// Each component is truncated toward zero before the chroma offset of 128
/// is added, so the result matches the reference filter bit for bit.
pub fn rgb_to_yuv(rgb: u32) -> u32 {
    let r = ((rgb >> 16) & 0xFF) as f64;
    let g = ((rgb >> 8) & 0xFF) as f64;
    let b = (rgb & 0xFF) as f64;

    let y = (0.299 * r + 0.587 * g + 0.114 * b) as i32;
    let u = (-0.169 * r - 0.331 * g + 0.5 * b) as i32 + 128;
    let v = (0.5 * r - 0.419 * g - 0.081 * b) as i32 + 128;

    ((y as u32) << 16) | ((u as u32) << 8) | v as u32
}

/// Precomputed YUV value for every RGB color.
pub struct YuvTable {
    entries: Box<[u32]>,
}

impl YuvTable {
    /// Build the full table, spreading the work over the rayon pool.
    pub fn build() -> Self {
        let start = Instant::now();
        let mut entries = vec![0u32; TABLE_LEN].into_boxed_slice();
        entries
            .par_chunks_mut(BUILD_CHUNK)
            .enumerate()
            .for_each(|(chunk, slots)| {
                let base = (chunk * BUILD_CHUNK) as u32;
                for (offset, slot) in slots.iter_mut().enumerate() {
                    *slot = rgb_to_yuv(base + offset as u32);
                }
            });
        debug!(elapsed_ms = start.elapsed().as_millis() as u64, "built YUV cache");
        Self { entries }
    }

    /// Look up the YUV value of a color. Alpha bits are ignored.
    #[inline]
    pub fn lookup(&self, color: u32) -> u32 {
        self.entries[(color & RGB_MASK) as usize]
    }
}

impl std::fmt::Debug for YuvTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YuvTable")
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// Build the process-wide cache if needed and return a handle to it.
///
/// Calling this more than once is cheap: later calls return the existing
/// table.
pub fn init() -> Arc<YuvTable> {
    if let Some(table) = CACHE.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        return Arc::clone(table);
    }

    let mut slot = CACHE.write().unwrap_or_else(PoisonError::into_inner);
    // Another thread may have finished building while we waited for the lock.
    if let Some(table) = slot.as_ref() {
        return Arc::clone(table);
    }
    let table = Arc::new(YuvTable::build());
    *slot = Some(Arc::clone(&table));
    table
}

/// Drop the process-wide cache.
pub fn deinit() {
    let released = CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
        .is_some();
    if released {
        debug!("released YUV cache");
    }
}

/// Whether [`init`] has run without a matching [`deinit`].
pub fn is_initialized() -> bool {
    CACHE.read().unwrap_or_else(PoisonError::into_inner).is_some()
}

/// Shared handle to the cache.
///
/// # Errors
///
/// Returns [`HqxError::CacheNotInitialized`] when [`init`] has not run.
pub fn handle() -> Result<Arc<YuvTable>> {
    CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(Arc::clone)
        .ok_or(HqxError::CacheNotInitialized)
}

/// Look up one color through the global cache.
///
/// Takes the cache lock on every call; hot loops should hold a [`YuvTable`]
/// handle instead.
pub fn lookup(color: u32) -> Result<u32> {
    handle().map(|table| table.lookup(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_yuv_black() {
        assert_eq!(rgb_to_yuv(0x000000), 0x00_80_80);
    }

    #[test]
    fn test_rgb_to_yuv_white() {
        let yuv = rgb_to_yuv(0xFFFFFF);
        assert_eq!(yuv >> 16, 255);
        assert_eq!((yuv >> 8) & 0xFF, 128);
        assert_eq!(yuv & 0xFF, 128);
    }

    #[test]
    fn test_rgb_to_yuv_pure_red() {
        // y = 76.245, u = -43.095 -> -43 + 128, v = 127.5 -> 127 + 128
        let yuv = rgb_to_yuv(0xFF0000);
        assert_eq!(yuv >> 16, 76);
        assert_eq!((yuv >> 8) & 0xFF, 85);
        assert_eq!(yuv & 0xFF, 255);
    }

    #[test]
    fn test_rgb_to_yuv_truncates_toward_zero() {
        // u = -0.169 * 1 = -0.169 truncates to 0, not -1
        let yuv = rgb_to_yuv(0x010000);
        assert_eq!((yuv >> 8) & 0xFF, 128);

        // mid grey lands a hair under 127 in floating point
        assert_eq!(rgb_to_yuv(0x7F7F7F) >> 16, 126);
    }

    #[test]
    fn test_rgb_to_yuv_fits_24_bits() {
        for rgb in [0x000000, 0xFFFFFF, 0xFF0000, 0x00FF00, 0x0000FF, 0x123456] {
            assert_eq!(rgb_to_yuv(rgb) & 0xFF00_0000, 0);
        }
    }
}
