//! Character rain painted on the wired theme's walls.

use crate::constants::*;
use crate::surface::{FontSpec, Rgba, Surface};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

const RAIN_FONT: FontSpec = FontSpec {
    size_px: RAIN_FONT_PX,
    family: "monospace",
};

/// Multi-line text fragment drifting down the back wall.
#[derive(Clone, Debug, PartialEq)]
pub struct Snippet {
    pub text: &'static str,
    pub x: f32,
    /// Baseline of the first line.
    pub y: f32,
}

#[derive(Clone, Debug)]
pub struct RainState {
    glyphs: Vec<char>,
    /// Current row of each column's drop, in cells.
    drops: [u32; RAIN_COLUMNS],
    snippets: SmallVec<[Snippet; SNIPPET_MAX_LIVE]>,
}

impl Default for RainState {
    fn default() -> Self {
        Self::new()
    }
}

impl RainState {
    pub fn new() -> Self {
        Self {
            glyphs: RAIN_GLYPHS.chars().collect(),
            drops: [0; RAIN_COLUMNS],
            snippets: SmallVec::new(),
        }
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// One glyph per column (most ticks), then advance that column's drop.
    ///
    /// A drop only wraps once its previous row is below the bottom edge and
    /// an independent draw clears the reset threshold, so the column keeps
    /// falling off-screen for a random number of extra ticks.
    pub(crate) fn paint_columns<S: Surface>(&mut self, surface: &mut S, rng: &mut StdRng) {
        let height = surface.size().y;
        let mut utf8 = [0u8; 4];
        for (column, drop) in self.drops.iter_mut().enumerate() {
            if !rng.gen_bool(RAIN_DRAW_PROBABILITY) {
                continue;
            }
            let glyph = self.glyphs[rng.gen_range(0..self.glyphs.len())];
            let origin = Vec2::new(column as f32 * RAIN_CELL, *drop as f32 * RAIN_CELL);
            surface.fill_text(
                glyph.encode_utf8(&mut utf8),
                origin,
                RAIN_FONT,
                Rgba::RAIN_GREEN,
            );
            let row = *drop;
            *drop += 1;
            if row as f32 * RAIN_CELL > height && rng.gen::<f64>() > RAIN_RESET_THRESHOLD {
                *drop = 0;
            }
        }
    }

    /// Draw and advance live snippets, drop the ones past the bottom, maybe spawn one.
    pub(crate) fn paint_snippets<S: Surface>(&mut self, surface: &mut S, rng: &mut StdRng) {
        let height = surface.size().y;
        for snippet in &mut self.snippets {
            for (line_no, line) in snippet.text.lines().enumerate() {
                let origin = Vec2::new(
                    snippet.x,
                    snippet.y + line_no as f32 * SNIPPET_LINE_HEIGHT,
                );
                surface.fill_text(line, origin, RAIN_FONT, Rgba::RAIN_GREEN);
            }
            snippet.y += SNIPPET_SPEED;
        }
        self.snippets.retain(|s| s.y <= height);

        if rng.gen_bool(SNIPPET_SPAWN_PROBABILITY) && self.snippets.len() < SNIPPET_MAX_LIVE {
            let text = SNIPPET_POOL.choose(rng).copied().unwrap_or_default();
            self.snippets.push(Snippet {
                text,
                x: rng.gen::<f32>() * SNIPPET_MAX_X,
                y: 0.0,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};

    #[test]
    fn glyph_set_mixes_scripts() {
        let rain = RainState::new();
        assert!(rain.glyphs.contains(&'A'));
        assert!(rain.glyphs.contains(&'7'));
        assert!(rain.glyphs.contains(&'ん'));
    }

    #[test]
    fn glyphs_land_on_column_grid() {
        let mut rain = RainState::new();
        let mut surface = RecordingSurface::new(RASTER_SIZE, RASTER_SIZE);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            rain.paint_columns(&mut surface, &mut rng);
        }
        for op in surface.ops() {
            let DrawOp::FillText { origin, text, .. } = op else {
                panic!("unexpected op {op:?}");
            };
            assert_eq!(text.chars().count(), 1);
            assert_eq!(origin.x % RAIN_CELL, 0.0);
            assert_eq!(origin.y % RAIN_CELL, 0.0);
            assert!(origin.x < RAIN_COLUMNS as f32 * RAIN_CELL);
        }
    }
}
