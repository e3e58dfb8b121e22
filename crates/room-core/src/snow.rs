//! Snowfall overlay: a fixed population of rotating six-armed flakes drawn on
//! a transparent layer above the walls.

use crate::constants::*;
use crate::layers::RasterLayer;
use crate::surface::{Rgba, Segment, StrokeStyle, Surface};
use glam::{Affine2, Vec2};
use rand::prelude::*;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flake {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    /// Units per tick.
    pub speed: f32,
    /// Degrees.
    pub angle: f32,
    /// Degrees per tick.
    pub rotation_speed: f32,
}

impl Flake {
    fn spawn(rng: &mut StdRng, size: Vec2) -> Self {
        Self {
            x: rng.gen::<f32>() * size.x,
            y: rng.gen::<f32>() * size.y - FLAKE_SPAWN_ABOVE,
            scale: FLAKE_SCALE_MIN + rng.gen::<f32>() * FLAKE_SCALE_SPAN,
            speed: FLAKE_SPEED_MIN + rng.gen::<f32>() * FLAKE_SPEED_SPAN,
            angle: rng.gen::<f32>() * 360.0,
            rotation_speed: (rng.gen::<f32>() - 0.5) * FLAKE_ROTATION_SPEED_SPAN,
        }
    }
}

/// One arm of the flake pointing up (negative y): the spoke and its two branches.
const ARM: [(Vec2, Vec2); 3] = [
    (Vec2::ZERO, Vec2::new(0.0, -FLAKE_ARM_LENGTH)),
    (
        Vec2::new(0.0, -FLAKE_BRANCH_START),
        Vec2::new(-FLAKE_BRANCH_SPREAD, -FLAKE_BRANCH_END),
    ),
    (
        Vec2::new(0.0, -FLAKE_BRANCH_START),
        Vec2::new(FLAKE_BRANCH_SPREAD, -FLAKE_BRANCH_END),
    ),
];

/// Appends the 18 segments of a snowflake centred at `center`.
pub fn flake_segments(center: Vec2, angle_rad: f32, scale: f32, out: &mut Vec<Segment>) {
    let placement = Affine2::from_scale_angle_translation(Vec2::splat(scale), angle_rad, center);
    for arm in 0..6 {
        let spin = Affine2::from_angle(arm as f32 * PI / 3.0);
        let to_layer = placement * spin;
        out.extend(ARM.iter().map(|&(from, to)| Segment {
            from: to_layer.transform_point2(from),
            to: to_layer.transform_point2(to),
        }));
    }
}

pub struct SnowAnimator<S: Surface> {
    surface: S,
    flakes: [Flake; FLAKE_COUNT],
    rng: StdRng,
    scratch: Vec<Segment>,
    dirty: bool,
}

impl<S: Surface> SnowAnimator<S> {
    pub fn new(surface: S, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let size = surface.size();
        let flakes = std::array::from_fn(|_| Flake::spawn(&mut rng, size));
        Self {
            surface,
            flakes,
            rng,
            scratch: Vec::with_capacity(18),
            dirty: false,
        }
    }

    pub fn flakes(&self) -> &[Flake] {
        &self.flakes
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn update(&mut self) {
        let size = self.surface.size();
        self.surface.clear();
        for flake in &mut self.flakes {
            let center = Vec2::new(flake.x.round(), flake.y.round());
            self.scratch.clear();
            flake_segments(center, flake.angle.to_radians(), flake.scale, &mut self.scratch);
            self.surface.stroke_segments(
                &self.scratch,
                StrokeStyle {
                    color: Rgba::SNOW_BLUE,
                    width: FLAKE_LINE_WIDTH * flake.scale,
                },
            );

            flake.y += flake.speed;
            flake.angle += flake.rotation_speed;
            if flake.y > size.y + FLAKE_RECYCLE_MARGIN {
                flake.y = -FLAKE_RECYCLE_MARGIN;
                flake.x = self.rng.gen::<f32>() * size.x;
            }
        }
        self.dirty = true;
    }
}

impl<S: Surface> RasterLayer for SnowAnimator<S> {
    type Surface = S;

    fn update(&mut self) {
        SnowAnimator::update(self);
    }

    fn surface(&self) -> &S {
        &self.surface
    }

    fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
