// Host-side tests for the back-wall overlay projection.

use glam::{Vec2, Vec3};
use room_core::constants::*;
use room_core::projector::{back_wall_corners, compute_overlay_box, project_to_screen};
use room_core::{Camera, Viewport};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

#[test]
fn straight_on_camera_preserves_wall_aspect() {
    let vp = Viewport::new(800.0, 600.0);
    let cam = Camera::room(vp.aspect());
    let b = compute_overlay_box(&cam.view_projection(), vp.width, vp.height);
    let wall_aspect = OVERLAY_HALF_WIDTH / OVERLAY_HALF_HEIGHT;
    assert!(b.width > 0.0 && b.height > 0.0);
    assert!(
        approx(b.width / b.height, wall_aspect, 1e-4),
        "box {}x{}",
        b.width,
        b.height
    );
}

#[test]
fn straight_on_camera_centres_the_box() {
    let vp = Viewport::new(1280.0, 620.0);
    let cam = Camera::room(vp.aspect());
    let b = compute_overlay_box(&cam.view_projection(), vp.width, vp.height);
    assert!(approx(b.left + b.width / 2.0, 640.0, 1e-2));
    assert!(approx(b.top + b.height / 2.0, 310.0, 1e-2));
}

#[test]
fn box_height_matches_perspective_formula() {
    let vp = Viewport::new(800.0, 600.0);
    let cam = Camera::room(vp.aspect());
    let b = compute_overlay_box(&cam.view_projection(), vp.width, vp.height);
    let distance = ROOM_DEPTH / 2.0 - CAMERA_EYE[2];
    let focal = 1.0 / (CAMERA_FOV_DEGREES.to_radians() / 2.0).tan();
    let expected = OVERLAY_HALF_HEIGHT * focal / distance * vp.height;
    assert!(approx(b.height, expected, 1e-2), "{} vs {}", b.height, expected);
}

#[test]
fn screen_y_is_flipped_relative_to_world_up() {
    let vp = Viewport::new(800.0, 600.0);
    let vp_m = Camera::room(vp.aspect()).view_projection();
    let up = project_to_screen(&vp_m, Vec3::new(0.0, 5.0, 15.0), vp.width, vp.height);
    let down = project_to_screen(&vp_m, Vec3::new(0.0, -5.0, 15.0), vp.width, vp.height);
    assert!(up.y < 300.0);
    assert!(down.y > 300.0);
}

#[test]
fn resize_scales_box_with_viewport() {
    let small = Viewport::new(640.0, 480.0);
    let large = Viewport::new(1280.0, 960.0);
    let cam = Camera::room(small.aspect());
    let a = compute_overlay_box(&cam.view_projection(), small.width, small.height);
    let b = compute_overlay_box(&cam.view_projection(), large.width, large.height);
    assert!(approx(b.left, a.left * 2.0, 1e-2));
    assert!(approx(b.top, a.top * 2.0, 1e-2));
    assert!(approx(b.width, a.width * 2.0, 1e-2));
    assert!(approx(b.height, a.height * 2.0, 1e-2));
}

#[test]
fn oblique_camera_box_bounds_every_corner() {
    let vp = Viewport::new(1000.0, 700.0);
    let mut cam = Camera::room(vp.aspect());
    cam.eye = Vec3::new(4.0, -3.0, -8.0);
    let m = cam.view_projection();
    let b = compute_overlay_box(&m, vp.width, vp.height);
    let corners: Vec<Vec2> = back_wall_corners()
        .iter()
        .map(|c| project_to_screen(&m, *c, vp.width, vp.height))
        .collect();
    for p in &corners {
        assert!(p.x >= b.left - 1e-3 && p.x <= b.left + b.width + 1e-3);
        assert!(p.y >= b.top - 1e-3 && p.y <= b.top + b.height + 1e-3);
    }
    // Each box edge is touched by at least one corner.
    assert!(corners.iter().any(|p| approx(p.x, b.left, 1e-3)));
    assert!(corners.iter().any(|p| approx(p.y, b.top + b.height, 1e-3)));
}
