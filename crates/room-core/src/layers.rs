use crate::image::ImageSlot;
use crate::snow::SnowAnimator;
use crate::surface::Surface;
use crate::texture::TextureAnimator;
use crate::theme::{LayerId, Theme};

/// An animated 2D buffer feeding one or more box faces.
pub trait RasterLayer {
    type Surface: Surface;

    /// Paint the next frame.
    fn update(&mut self);
    fn surface(&self) -> &Self::Surface;
    /// Returns whether the buffer changed since the last call, and resets the flag.
    fn take_dirty(&mut self) -> bool;
}

/// The five raster layers of the room. Only the active theme's layers are
/// painted; the others keep their last frame.
pub struct RoomLayers<S: Surface> {
    pub professional: TextureAnimator<S>,
    pub professional_back: TextureAnimator<S>,
    pub wired: TextureAnimator<S>,
    pub wired_back: TextureAnimator<S>,
    pub snow: SnowAnimator<S>,
}

impl<S: Surface> RoomLayers<S> {
    /// Builds every layer with a surface from `make_surface`. The back walls of
    /// both themes share `backdrop`.
    pub fn new<E>(
        mut make_surface: impl FnMut(LayerId) -> Result<S, E>,
        backdrop: ImageSlot<S::Image>,
        seed: u64,
    ) -> Result<Self, E> {
        // Distinct streams per layer, derived from the base seed.
        let seed_for = |i: u64| seed ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Ok(Self {
            professional: TextureAnimator::new(
                Theme::Professional,
                false,
                make_surface(LayerId::ProfessionalWalls)?,
                seed_for(1),
            ),
            professional_back: TextureAnimator::new(
                Theme::Professional,
                true,
                make_surface(LayerId::ProfessionalBackWall)?,
                seed_for(2),
            )
            .with_backdrop(backdrop.clone()),
            wired: TextureAnimator::new(
                Theme::Wired,
                false,
                make_surface(LayerId::WiredWalls)?,
                seed_for(3),
            ),
            wired_back: TextureAnimator::new(
                Theme::Wired,
                true,
                make_surface(LayerId::WiredBackWall)?,
                seed_for(4),
            )
            .with_backdrop(backdrop),
            snow: SnowAnimator::new(make_surface(LayerId::Snow)?, seed_for(5)),
        })
    }

    /// Advance the layers that `theme` displays by one tick.
    pub fn update_for(&mut self, theme: Theme) {
        let profile = theme.profile();
        self.get_mut(profile.standard_layer).update();
        self.get_mut(profile.back_layer).update();
        if profile.snow_visible {
            self.snow.update();
        }
    }

    pub fn get(&self, id: LayerId) -> &dyn RasterLayer<Surface = S> {
        match id {
            LayerId::ProfessionalWalls => &self.professional,
            LayerId::ProfessionalBackWall => &self.professional_back,
            LayerId::WiredWalls => &self.wired,
            LayerId::WiredBackWall => &self.wired_back,
            LayerId::Snow => &self.snow,
        }
    }

    pub fn get_mut(&mut self, id: LayerId) -> &mut dyn RasterLayer<Surface = S> {
        match id {
            LayerId::ProfessionalWalls => &mut self.professional,
            LayerId::ProfessionalBackWall => &mut self.professional_back,
            LayerId::WiredWalls => &mut self.wired,
            LayerId::WiredBackWall => &mut self.wired_back,
            LayerId::Snow => &mut self.snow,
        }
    }

    pub fn surface(&self, id: LayerId) -> &S {
        self.get(id).surface()
    }

    pub fn take_dirty(&mut self, id: LayerId) -> bool {
        self.get_mut(id).take_dirty()
    }
}
