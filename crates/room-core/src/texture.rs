use crate::constants::RAIN_TRAIL_ALPHA;
use crate::image::ImageSlot;
use crate::layers::RasterLayer;
use crate::rain::RainState;
use crate::surface::{Rect, Rgba, Surface};
use crate::theme::Theme;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub enum Pattern {
    /// Fading character rain, plus snippets on the back wall.
    Rain(RainState),
    /// Solid white, plus the backdrop image on the back wall.
    Plain,
}

/// Wall texture for one theme. Each [`update`](TextureAnimator::update) paints
/// exactly one frame into the owned surface.
pub struct TextureAnimator<S: Surface> {
    is_back_face: bool,
    surface: S,
    backdrop: Option<ImageSlot<S::Image>>,
    pattern: Pattern,
    rng: StdRng,
    dirty: bool,
}

impl<S: Surface> TextureAnimator<S> {
    pub fn new(theme: Theme, is_back_face: bool, surface: S, seed: u64) -> Self {
        let pattern = match theme {
            Theme::Wired => Pattern::Rain(RainState::new()),
            Theme::Professional => Pattern::Plain,
        };
        Self {
            is_back_face,
            surface,
            backdrop: None,
            pattern,
            rng: StdRng::seed_from_u64(seed),
            dirty: false,
        }
    }

    /// Image composited over the back face once it has loaded.
    pub fn with_backdrop(mut self, slot: ImageSlot<S::Image>) -> Self {
        self.backdrop = Some(slot);
        self
    }

    pub fn rain(&self) -> Option<&RainState> {
        match &self.pattern {
            Pattern::Rain(rain) => Some(rain),
            Pattern::Plain => None,
        }
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn update(&mut self) {
        let Self {
            is_back_face,
            surface,
            backdrop,
            pattern,
            rng,
            ..
        } = self;
        let size = surface.size();
        let full = Rect::new(0.0, 0.0, size.x, size.y);
        let backdrop = backdrop.as_ref().filter(|_| *is_back_face);

        match pattern {
            Pattern::Rain(rain) => {
                surface.fill_rect(full, Rgba::BLACK.with_alpha(RAIN_TRAIL_ALPHA));
                if let Some(slot) = backdrop {
                    slot.with_ready(|img| surface.draw_image(img, full));
                }
                rain.paint_columns(surface, rng);
                if *is_back_face {
                    rain.paint_snippets(surface, rng);
                }
            }
            Pattern::Plain => {
                surface.fill_rect(full, Rgba::WHITE);
                if let Some(slot) = backdrop {
                    slot.with_ready(|img| surface.draw_image(img, full));
                }
            }
        }
        self.dirty = true;
    }
}

impl<S: Surface> RasterLayer for TextureAnimator<S> {
    type Surface = S;

    fn update(&mut self) {
        TextureAnimator::update(self);
    }

    fn surface(&self) -> &S {
        &self.surface
    }

    fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
