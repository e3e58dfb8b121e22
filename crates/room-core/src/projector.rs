use crate::constants::{OVERLAY_HALF_HEIGHT, OVERLAY_HALF_WIDTH, ROOM_DEPTH};
use glam::{Mat4, Vec2, Vec3};

/// Screen-space rectangle in CSS pixels, origin top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl OverlayBox {
    pub fn from_points(points: &[Vec2]) -> Self {
        let (min, max) = points.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        );
        Self {
            left: min.x,
            top: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }
}

/// Corners of the back-wall quad the overlay covers, in world space.
pub fn back_wall_corners() -> [Vec3; 4] {
    let z = ROOM_DEPTH / 2.0;
    let (hw, hh) = (OVERLAY_HALF_WIDTH, OVERLAY_HALF_HEIGHT);
    [
        Vec3::new(-hw, hh, z),
        Vec3::new(hw, hh, z),
        Vec3::new(-hw, -hh, z),
        Vec3::new(hw, -hh, z),
    ]
}

/// Projects a world point to viewport pixels. Screen y grows downward while
/// NDC y grows upward, hence the flip.
#[inline]
pub fn project_to_screen(view_proj: &Mat4, world: Vec3, width: f32, height: f32) -> Vec2 {
    let ndc = view_proj.project_point3(world);
    Vec2::new(
        (ndc.x * 0.5 + 0.5) * width,
        (1.0 - (ndc.y * 0.5 + 0.5)) * height,
    )
}

/// Axis-aligned bounds of the projected back wall. A planar quad under
/// perspective is generally not axis-aligned on screen, so the overlay uses
/// the bounding box.
pub fn compute_overlay_box(view_proj: &Mat4, width: f32, height: f32) -> OverlayBox {
    let points = back_wall_corners().map(|c| project_to_screen(view_proj, c, width, height));
    OverlayBox::from_points(&points)
}
