// Host-side tests for pixel-ratio capping and resize math.

#![allow(dead_code)]
mod pure {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
}

use crate::pure::viewport::*;

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(capped_pixel_ratio(1.0), 1.0);
    assert_eq!(capped_pixel_ratio(1.5), 1.5);
    assert_eq!(capped_pixel_ratio(2.0), 2.0);
    assert_eq!(capped_pixel_ratio(3.0), 2.0);
}

#[test]
fn missing_pixel_ratio_falls_back_to_one() {
    assert_eq!(capped_pixel_ratio(0.0), 1.0);
    assert_eq!(capped_pixel_ratio(-2.0), 1.0);
    assert_eq!(capped_pixel_ratio(f64::NAN), 1.0);
}

#[test]
fn resize_sets_aspect_and_backing_size() {
    for (w, h, dpr) in [(1280.0, 720.0, 1.0), (390.0, 844.0, 3.0), (1000.5, 600.25, 1.25)] {
        let vp = Viewport::new(w, h, dpr);
        let r = capped_pixel_ratio(dpr);
        assert!((vp.aspect() - (w / h) as f32).abs() < 1e-6);
        assert_eq!(
            vp.backing_size(),
            ((w * r).floor() as u32, (h * r).floor() as u32)
        );
    }
}

#[test]
fn retina_backing_store_doubles() {
    let vp = Viewport::new(800.0, 600.0, 2.0);
    assert_eq!(vp.backing_size(), (1600, 1200));
    assert!((vp.aspect() - 800.0 / 600.0).abs() < 1e-6);
}

#[test]
fn degenerate_viewport_keeps_a_drawable_surface() {
    let vp = Viewport::new(0.0, 0.0, 1.0);
    assert_eq!(vp.backing_size(), (1, 1));
    assert_eq!(vp.aspect(), 1.0);
}

#[test]
fn extent_within_device_limit_is_unchanged() {
    assert_eq!(clamp_extent((1600, 1200), 8192), (1600, 1200));
    assert_eq!(clamp_extent((8192, 8192), 8192), (8192, 8192));
}

#[test]
fn oversized_backing_store_is_scaled_to_the_limit() {
    // 5000 css px wide at dpr 2 exceeds the 8192 default.
    let (w, h) = Viewport::new(5000.0, 1000.0, 2.0).backing_size();
    assert_eq!((w, h), (10000, 2000));
    let (cw, ch) = clamp_extent((w, h), 8192);
    assert_eq!(cw, 8192);
    assert!(ch <= 8192);
    assert!((cw as f64 / ch as f64 - 5.0).abs() < 0.01);

    assert_eq!(clamp_extent((3000, 12000), 4096), (1024, 4096));
}

#[test]
fn clamped_extent_never_collapses_to_zero() {
    assert_eq!(clamp_extent((100_000, 1), 2048), (2048, 1));
    assert_eq!(clamp_extent((0, 0), 2048), (1, 1));
}
