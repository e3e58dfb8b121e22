// Host-side tests for the wall texture animators.

use room_core::constants::*;
use room_core::surface::{DrawOp, Rect, RecordingSurface, Rgba};
use room_core::texture::TextureAnimator;
use room_core::{AssetError, ImageSlot, RasterLayer, Theme};

fn surface() -> RecordingSurface {
    RecordingSurface::new(RASTER_SIZE, RASTER_SIZE)
}

fn full() -> Rect {
    Rect::square(RASTER_SIZE)
}

#[test]
fn professional_back_wall_without_image_is_plain_white() {
    let slot = ImageSlot::pending();
    slot.fail(AssetError::LoadFailed {
        url: "lainx420.png".into(),
    });
    let mut tex = TextureAnimator::new(Theme::Professional, true, surface(), 1).with_backdrop(slot);
    tex.update();
    assert_eq!(
        tex.surface_mut().take_ops(),
        vec![DrawOp::FillRect(full(), Rgba::WHITE)]
    );
}

#[test]
fn professional_back_wall_composites_image_once_loaded() {
    let slot = ImageSlot::pending();
    let mut tex =
        TextureAnimator::new(Theme::Professional, true, surface(), 1).with_backdrop(slot.clone());
    tex.update();
    assert_eq!(tex.surface_mut().take_ops().len(), 1);

    slot.resolve(());
    tex.update();
    assert_eq!(
        tex.surface_mut().take_ops(),
        vec![
            DrawOp::FillRect(full(), Rgba::WHITE),
            DrawOp::DrawImage(full())
        ]
    );
}

#[test]
fn professional_side_walls_ignore_the_image() {
    let slot = ImageSlot::pending();
    slot.resolve(());
    let mut tex = TextureAnimator::new(Theme::Professional, false, surface(), 1).with_backdrop(slot);
    tex.update();
    assert_eq!(
        tex.surface_mut().take_ops(),
        vec![DrawOp::FillRect(full(), Rgba::WHITE)]
    );
    assert!(tex.rain().is_none());
}

#[test]
fn rain_starts_with_translucent_veil() {
    let mut tex = TextureAnimator::new(Theme::Wired, false, surface(), 5);
    tex.update();
    let ops = tex.surface_mut().take_ops();
    assert_eq!(
        ops[0],
        DrawOp::FillRect(full(), Rgba::BLACK.with_alpha(RAIN_TRAIL_ALPHA))
    );
    let glyphs = ops[1..]
        .iter()
        .filter(|op| matches!(op, DrawOp::FillText { color, .. } if *color == Rgba::RAIN_GREEN))
        .count();
    assert_eq!(glyphs, ops.len() - 1);
    assert!(glyphs <= RAIN_COLUMNS);
}

#[test]
fn rain_back_wall_draws_image_under_glyphs() {
    let slot = ImageSlot::pending();
    slot.resolve(());
    let mut tex = TextureAnimator::new(Theme::Wired, true, surface(), 5).with_backdrop(slot);
    tex.update();
    let ops = tex.surface_mut().take_ops();
    assert!(matches!(ops[0], DrawOp::FillRect(..)));
    assert_eq!(ops[1], DrawOp::DrawImage(full()));
    assert!(ops[2..]
        .iter()
        .all(|op| matches!(op, DrawOp::FillText { .. })));
}

#[test]
fn drops_reset_only_after_passing_the_bottom() {
    let mut tex = TextureAnimator::new(Theme::Wired, false, surface(), 11);
    let mut resets = 0;
    for _ in 0..3_000 {
        let before = tex.rain().map(|r| r.drops().to_vec()).unwrap_or_default();
        tex.update();
        let after = tex.rain().map(|r| r.drops().to_vec()).unwrap_or_default();
        for (prev, next) in before.iter().zip(&after) {
            if *next == 0 && *prev != 0 {
                resets += 1;
                assert!(
                    *prev as f32 * RAIN_CELL > RASTER_SIZE,
                    "drop reset early at row {prev}"
                );
            } else {
                assert!(*next == *prev || *next == *prev + 1);
            }
        }
    }
    assert!(resets > 0);
}

#[test]
fn drops_linger_past_the_bottom_before_resetting() {
    let first_eligible = (RASTER_SIZE / RAIN_CELL).floor() as u32 + 1;
    let mut tex = TextureAnimator::new(Theme::Wired, false, surface(), 11);
    let mut reset_rows = Vec::new();
    for _ in 0..20_000 {
        let before = tex.rain().map(|r| r.drops().to_vec()).unwrap_or_default();
        tex.update();
        tex.surface_mut().take_ops();
        let after = tex.rain().map(|r| r.drops().to_vec()).unwrap_or_default();
        for (prev, next) in before.iter().zip(&after) {
            if *next == 0 && *prev != 0 {
                reset_rows.push(*prev);
            }
        }
    }

    assert!(reset_rows.len() > 1_000);
    assert_eq!(reset_rows.iter().min(), Some(&first_eligible));
    // Each eligible draw resets with probability 1 - RAIN_RESET_THRESHOLD,
    // so only a small share reset on the first eligible row.
    let at_first = reset_rows.iter().filter(|r| **r == first_eligible).count();
    assert!(at_first * 10 < reset_rows.len(), "{at_first} of {}", reset_rows.len());
    let mean = reset_rows.iter().map(|r| *r as f64).sum::<f64>() / reset_rows.len() as f64;
    assert!(mean > first_eligible as f64 + 20.0, "mean reset row {mean}");
}

#[test]
fn snippets_stay_capped_and_fall_until_removed() {
    let mut tex = TextureAnimator::new(Theme::Wired, true, surface(), 21);
    let mut seen_any = false;
    for _ in 0..5_000 {
        let before = tex
            .rain()
            .map(|r| r.snippets().to_vec())
            .unwrap_or_default();
        tex.update();
        tex.surface_mut().take_ops();
        let rain = tex.rain().expect("wired texture rains");
        let after = rain.snippets();
        assert!(after.len() <= SNIPPET_MAX_LIVE);
        seen_any |= !after.is_empty();

        // Survivors keep their order, each one unit lower; spawns append at y = 0.
        let survivors: Vec<_> = before
            .iter()
            .filter(|s| s.y + SNIPPET_SPEED <= RASTER_SIZE)
            .collect();
        assert!(after.len() == survivors.len() || after.len() == survivors.len() + 1);
        for (prev, next) in survivors.iter().zip(after) {
            assert_eq!(next.text, prev.text);
            assert_eq!(next.y, prev.y + SNIPPET_SPEED);
            assert!(next.y <= RASTER_SIZE);
        }
        if after.len() > survivors.len() {
            let spawned = after.last().expect("non-empty");
            assert_eq!(spawned.y, 0.0);
            assert!((0.0..SNIPPET_MAX_X).contains(&spawned.x));
            assert!(SNIPPET_POOL.contains(&spawned.text));
        }
    }
    assert!(seen_any);
}

#[test]
fn side_walls_never_spawn_snippets() {
    let mut tex = TextureAnimator::new(Theme::Wired, false, surface(), 4);
    for _ in 0..1_000 {
        tex.update();
    }
    assert!(tex.rain().map(|r| r.snippets().is_empty()).unwrap_or(false));
}

#[test]
fn update_marks_layer_dirty_once() {
    let mut tex = TextureAnimator::new(Theme::Professional, false, surface(), 1);
    assert!(!tex.take_dirty());
    tex.update();
    assert!(tex.take_dirty());
    assert!(!tex.take_dirty());
}
