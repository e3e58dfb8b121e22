//! Page geometry that does not need the DOM, so it can be checked on the host.

use crate::constants::TOOLBAR_HEIGHT_PX;
use room_core::projector::OverlayBox;

/// CSS size of the 3D viewport for a window of the given inner size.
pub fn viewport_css_size(inner_width: f64, inner_height: f64) -> (f64, f64) {
    (
        inner_width.max(1.0),
        (inner_height - TOOLBAR_HEIGHT_PX).max(1.0),
    )
}

/// Backing-store size in device pixels for a canvas shown at `css_*`.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    (
        ((css_width * dpr) as u32).max(1),
        ((css_height * dpr) as u32).max(1),
    )
}

pub fn canvas_style(css_width: f64, css_height: f64) -> String {
    format!("width:{css_width}px;height:{css_height}px")
}

/// Inline style pinning the text overlay to `bounds`.
pub fn overlay_style(bounds: &OverlayBox, opacity: f32, displayed: bool) -> String {
    format!(
        "left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;opacity:{:.3};display:{}",
        bounds.left,
        bounds.top,
        bounds.width,
        bounds.height,
        opacity.clamp(0.0, 1.0),
        if displayed { "block" } else { "none" }
    )
}
