//! Per-face material descriptors for the room and snow boxes.

use crate::constants::*;
use crate::theme::{Color, LayerId, Theme};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shading {
    /// Texture colour as-is, no lighting.
    Unlit,
    /// Diffuse + specular highlights from the scene lights.
    Phong {
        shininess: f32,
        specular: Color,
        emissive: Color,
        emissive_intensity: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceMaterial {
    pub layer: LayerId,
    pub shading: Shading,
    pub transparent: bool,
    pub opacity: f32,
    /// Set on every rebind; the renderer clears it after rebuilding GPU state.
    pub needs_update: bool,
}

pub type MaterialSet = [FaceMaterial; FACE_COUNT];

#[derive(Clone, Debug, PartialEq)]
pub struct BoundMaterials {
    pub room: MaterialSet,
    pub snow: MaterialSet,
}

impl BoundMaterials {
    pub fn needs_update(&self) -> bool {
        self.room
            .iter()
            .chain(self.snow.iter())
            .any(|m| m.needs_update)
    }

    pub fn acknowledge(&mut self) {
        for m in self.room.iter_mut().chain(self.snow.iter_mut()) {
            m.needs_update = false;
        }
    }
}

/// Builds both material arrays from scratch for `theme`.
///
/// The back wall (face 4) of the room shows `back`; every other face shows
/// `standard`. The snow box is fully transparent on the back wall so the
/// image and text stay readable there.
pub fn bind(theme: Theme, standard: LayerId, back: LayerId, snow: LayerId) -> BoundMaterials {
    let lit = theme.profile().lit;
    let room = std::array::from_fn(|face| {
        let is_back = face == BACK_WALL_FACE;
        let shading = if lit {
            Shading::Phong {
                shininess: PHONG_SHININESS,
                specular: Color(PHONG_SPECULAR),
                emissive: if is_back {
                    Color(BACK_WALL_EMISSIVE)
                } else {
                    Color::BLACK
                },
                emissive_intensity: if is_back {
                    BACK_WALL_EMISSIVE_INTENSITY
                } else {
                    0.0
                },
            }
        } else {
            Shading::Unlit
        };
        FaceMaterial {
            layer: if is_back { back } else { standard },
            shading,
            transparent: false,
            opacity: 1.0,
            needs_update: true,
        }
    });
    let snow = std::array::from_fn(|face| FaceMaterial {
        layer: snow,
        shading: Shading::Unlit,
        transparent: true,
        opacity: if face == BACK_WALL_FACE { 0.0 } else { 1.0 },
        needs_update: true,
    });
    log::debug!("[materials] bound {:?}: walls={:?} back={:?}", theme, standard, back);
    BoundMaterials { room, snow }
}
