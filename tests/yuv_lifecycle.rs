//! Lifecycle tests for the process-wide YUV cache.
//!
//! Every test mutates global state, so they run serially.

use hqscale::{scale_image, yuv, HqxError, Magnifier, MagnifyConfig};
use image::{Rgba, RgbaImage};
use serial_test::serial;
use std::sync::Arc;
use std::thread;

#[test]
#[serial]
fn test_use_before_init_fails_fast() {
    yuv::deinit();
    assert!(!yuv::is_initialized());
    assert_eq!(yuv::handle().unwrap_err(), HqxError::CacheNotInitialized);
    assert_eq!(yuv::lookup(0xFF0000), Err(HqxError::CacheNotInitialized));
    assert_eq!(
        Magnifier::new(&MagnifyConfig::default()).unwrap_err(),
        HqxError::CacheNotInitialized
    );

    let image = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
    assert_eq!(
        scale_image(&image, &MagnifyConfig::default()).unwrap_err(),
        HqxError::CacheNotInitialized
    );
}

#[test]
#[serial]
fn test_init_then_lookup() {
    yuv::init();
    assert!(yuv::is_initialized());
    assert_eq!(yuv::lookup(0xFF0000), Ok((76 << 16) | (85 << 8) | 255));
    // alpha bits are ignored
    assert_eq!(yuv::lookup(0x80FF0000), yuv::lookup(0x00FF0000));
    assert_eq!(yuv::lookup(0x000000), Ok(0x008080));
}

#[test]
#[serial]
fn test_init_is_idempotent() {
    let first = yuv::init();
    let second = yuv::init();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &yuv::handle().unwrap()));
}

#[test]
#[serial]
fn test_concurrent_init_builds_once() {
    yuv::deinit();
    let handles: Vec<_> = (0..4).map(|_| thread::spawn(yuv::init)).collect();
    let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for table in &tables[1..] {
        assert!(Arc::ptr_eq(&tables[0], table));
    }
}

#[test]
#[serial]
fn test_deinit_keeps_outstanding_handles_alive() {
    let config = MagnifyConfig::default();
    yuv::init();
    let magnifier = Magnifier::new(&config).unwrap();
    let old = yuv::handle().unwrap();

    yuv::deinit();
    assert!(!yuv::is_initialized());

    // an existing magnifier keeps working on its own handle
    let out = magnifier.magnify_to_vec(&[0xFF00FF00; 4], 2, 2).unwrap();
    assert!(out.iter().all(|&c| c == 0xFF00FF00));

    // re-initializing builds a fresh table
    let fresh = yuv::init();
    assert!(!Arc::ptr_eq(&old, &fresh));
    assert_eq!(old.lookup(0x123456), fresh.lookup(0x123456));
}

#[test]
#[serial]
fn test_deinit_is_repeatable() {
    yuv::init();
    yuv::deinit();
    yuv::deinit();
    assert!(!yuv::is_initialized());
}
