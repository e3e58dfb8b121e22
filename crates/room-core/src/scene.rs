//! Theme state machine and the scene values it drives.

use crate::camera::{Camera, Viewport};
use crate::constants::OVERLAY_FADE;
use crate::layers::RoomLayers;
use crate::material::{self, BoundMaterials};
use crate::projector::{compute_overlay_box, OverlayBox};
use crate::surface::Surface;
use crate::theme::{Color, Fog, LayerId, LightSet, Theme};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FadeState {
    Visible,
    Fading { started: Duration },
    Hidden,
}

/// The HTML text block pinned over the back wall.
#[derive(Clone, Debug, PartialEq)]
pub struct TextOverlay {
    pub fade: FadeState,
    pub bounds: OverlayBox,
}

impl TextOverlay {
    pub fn opacity(&self, now: Duration) -> f32 {
        match self.fade {
            FadeState::Visible => 1.0,
            FadeState::Fading { started } => {
                let t = now.saturating_sub(started).as_secs_f32() / OVERLAY_FADE.as_secs_f32();
                (1.0 - t).clamp(0.0, 1.0)
            }
            FadeState::Hidden => 0.0,
        }
    }

    /// Whether the element takes part in layout (`display: block`).
    pub fn is_displayed(&self) -> bool {
        !matches!(self.fade, FadeState::Hidden)
    }

    fn advance(&mut self, now: Duration) {
        if let FadeState::Fading { started } = self.fade {
            if now.saturating_sub(started) >= OVERLAY_FADE {
                self.fade = FadeState::Hidden;
            }
        }
    }
}

/// Everything the presentation layer reads each frame.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub theme: Theme,
    pub fog: Fog,
    pub clear_color: Color,
    pub lights: LightSet,
    pub materials: BoundMaterials,
    pub snow_visible: bool,
    pub overlay: TextOverlay,
    pub camera: Camera,
    pub viewport: Viewport,
}

impl SceneState {
    pub fn button_label(&self) -> &'static str {
        self.theme.profile().label
    }

    fn reproject_overlay(&mut self) {
        self.overlay.bounds = compute_overlay_box(
            &self.camera.view_projection(),
            self.viewport.width,
            self.viewport.height,
        );
    }
}

/// Owns [`SceneState`] and runs the entry sequence of each theme.
pub struct ModeController {
    state: SceneState,
}

impl ModeController {
    /// Starts in the professional theme.
    pub fn new(viewport: Viewport) -> Self {
        let theme = Theme::default();
        let profile = theme.profile();
        let mut controller = Self {
            state: SceneState {
                theme,
                fog: profile.fog,
                clear_color: profile.clear_color,
                lights: LightSet::new(),
                materials: bind_for(theme),
                snow_visible: profile.snow_visible,
                overlay: TextOverlay {
                    fade: FadeState::Visible,
                    bounds: OverlayBox::default(),
                },
                camera: Camera::room(viewport.aspect()),
                viewport,
            },
        };
        controller.enter(theme, Duration::ZERO);
        controller
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    /// Flip to the other theme and run its entry sequence immediately.
    pub fn toggle(&mut self, now: Duration) {
        let next = self.state.theme.toggled();
        self.enter(next, now);
    }

    fn enter(&mut self, theme: Theme, now: Duration) {
        let profile = theme.profile();
        let s = &mut self.state;
        s.theme = theme;
        s.materials = bind_for(theme);
        s.fog = profile.fog;
        s.clear_color = profile.clear_color;
        // Replace, never append: the old rig is dropped first.
        s.lights = profile.lights();
        s.snow_visible = profile.snow_visible;
        if profile.overlay_visible {
            s.overlay.fade = FadeState::Visible;
            s.reproject_overlay();
        } else if s.overlay.is_displayed() {
            s.overlay.fade = FadeState::Fading { started: now };
        }
        log::info!(
            "[mode] entered {:?} (lights={}, snow={})",
            theme,
            s.lights.len(),
            s.snow_visible
        );
    }

    pub fn resize(&mut self, viewport: Viewport) {
        let s = &mut self.state;
        s.viewport = viewport;
        s.camera.aspect = viewport.aspect();
        s.reproject_overlay();
    }

    /// One frame: settle the fade, paint the active layers, re-pin the overlay.
    pub fn tick<S: Surface>(&mut self, now: Duration, layers: &mut RoomLayers<S>) {
        self.state.overlay.advance(now);
        layers.update_for(self.state.theme);
        self.state.reproject_overlay();
    }

    /// Called by the renderer once it has rebuilt bindings for the current materials.
    pub fn acknowledge_materials(&mut self) {
        self.state.materials.acknowledge();
    }
}

fn bind_for(theme: Theme) -> BoundMaterials {
    let profile = theme.profile();
    material::bind(
        theme,
        profile.standard_layer,
        profile.back_layer,
        LayerId::Snow,
    )
}
