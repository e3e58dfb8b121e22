// Host-side tests for page geometry: viewport, backing store and overlay style.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/layout.rs"]
mod layout;

use constants::TOOLBAR_HEIGHT_PX;
use layout::*;
use room_core::projector::{compute_overlay_box, OverlayBox};
use room_core::{Camera, Viewport};

#[test]
fn viewport_reserves_the_toolbar() {
    assert_eq!(
        viewport_css_size(1280.0, 800.0),
        (1280.0, 800.0 - TOOLBAR_HEIGHT_PX)
    );
}

#[test]
fn tiny_window_keeps_a_positive_viewport() {
    let (w, h) = viewport_css_size(0.0, 50.0);
    assert!(w >= 1.0 && h >= 1.0);
}

#[test]
fn backing_store_scales_with_device_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(100.0, 50.0, 1.5), (150, 75));
}

#[test]
fn nonsense_pixel_ratio_falls_back_to_one() {
    assert_eq!(backing_size(320.0, 240.0, 0.0), (320, 240));
    assert_eq!(backing_size(320.0, 240.0, -2.0), (320, 240));
}

#[test]
fn canvas_style_sets_css_size() {
    assert_eq!(canvas_style(640.0, 380.0), "width:640px;height:380px");
}

#[test]
fn overlay_style_pins_box_and_fades() {
    let b = OverlayBox {
        left: 10.0,
        top: 20.0,
        width: 300.0,
        height: 150.5,
    };
    assert_eq!(
        overlay_style(&b, 1.0, true),
        "left:10.0px;top:20.0px;width:300.0px;height:150.5px;opacity:1.000;display:block"
    );
    assert!(overlay_style(&b, 0.0, false).ends_with("opacity:0.000;display:none"));
    assert!(overlay_style(&b, 1.7, true).contains("opacity:1.000"));
}

#[test]
fn overlay_style_follows_projected_wall() {
    let (w, h) = viewport_css_size(1000.0, 700.0);
    let vp = Viewport::new(w as f32, h as f32);
    let b = compute_overlay_box(
        &Camera::room(vp.aspect()).view_projection(),
        vp.width,
        vp.height,
    );
    let style = overlay_style(&b, 0.5, true);
    assert!(style.starts_with(&format!("left:{:.1}px;", b.left)));
    assert!(style.contains("opacity:0.500"));
}
