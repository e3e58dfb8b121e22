//! Per-theme behaviour table.
//!
//! Everything that differs between the two presentation modes is looked up
//! here once per toggle through [`Theme::profile`], instead of branching on a
//! flag at every call site.

use glam::Vec3;
use smallvec::SmallVec;

/// The two mutually exclusive presentation modes. `Professional` is the
/// start-up theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Professional,
    Wired,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Professional => Theme::Wired,
            Theme::Wired => Theme::Professional,
        }
    }

    pub fn profile(self) -> &'static ThemeProfile {
        match self {
            Theme::Professional => &PROFESSIONAL,
            Theme::Wired => &WIRED,
        }
    }
}

/// Identifies one of the five raster layers that live for the whole process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerId {
    ProfessionalWalls,
    ProfessionalBackWall,
    WiredWalls,
    WiredBackWall,
    Snow,
}

impl LayerId {
    pub const ALL: [LayerId; 5] = [
        LayerId::ProfessionalWalls,
        LayerId::ProfessionalBackWall,
        LayerId::WiredWalls,
        LayerId::WiredBackWall,
        LayerId::Snow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LayerId::ProfessionalWalls => "professional_walls",
            LayerId::ProfessionalBackWall => "professional_back_wall",
            LayerId::WiredWalls => "wired_walls",
            LayerId::WiredBackWall => "wired_back_wall",
            LayerId::Snow => "snow",
        }
    }
}

/// Scene colour in `0xRRGGBB` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const BLACK: Color = Color(0x000000);

    pub fn to_array(self) -> [f32; 3] {
        let c = self.0;
        [
            ((c >> 16) & 0xff) as f32 / 255.0,
            ((c >> 8) & 0xff) as f32 / 255.0,
            (c & 0xff) as f32 / 255.0,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
    Point {
        color: Color,
        intensity: f32,
        distance: f32,
        position: Vec3,
    },
}

pub type LightSet = SmallVec<[Light; 3]>;

pub struct ThemeProfile {
    pub label: &'static str,
    pub standard_layer: LayerId,
    pub back_layer: LayerId,
    pub fog: Fog,
    pub clear_color: Color,
    /// Phong shading plus the light rig; unlit otherwise.
    pub lit: bool,
    pub snow_visible: bool,
    pub overlay_visible: bool,
    /// Class toggled on `<body>` while the theme is active.
    pub body_class: Option<&'static str>,
}

impl ThemeProfile {
    /// Fresh light rig for this theme. Empty for unlit themes.
    pub fn lights(&self) -> LightSet {
        let mut lights = LightSet::new();
        if self.lit {
            lights.push(Light::Ambient {
                color: Color::WHITE,
                intensity: 0.6,
            });
            lights.push(Light::Directional {
                color: Color::WHITE,
                intensity: 0.9,
                position: Vec3::new(5.0, 8.0, -5.0),
            });
            lights.push(Light::Point {
                color: Color::WHITE,
                intensity: 0.4,
                distance: 30.0,
                position: Vec3::new(0.0, 0.0, 12.0),
            });
        }
        lights
    }
}

static PROFESSIONAL: ThemeProfile = ThemeProfile {
    label: "Layer: Default",
    standard_layer: LayerId::ProfessionalWalls,
    back_layer: LayerId::ProfessionalBackWall,
    fog: Fog {
        color: Color::WHITE,
        near: 5.0,
        far: 20.0,
    },
    clear_color: Color::WHITE,
    lit: true,
    snow_visible: true,
    overlay_visible: true,
    body_class: Some("professional"),
};

static WIRED: ThemeProfile = ThemeProfile {
    label: "Layer: Wired",
    standard_layer: LayerId::WiredWalls,
    back_layer: LayerId::WiredBackWall,
    fog: Fog {
        color: Color::BLACK,
        near: 10.0,
        far: 50.0,
    },
    clear_color: Color::BLACK,
    lit: false,
    snow_visible: false,
    overlay_visible: false,
    body_class: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Theme::default().toggled().toggled(), Theme::Professional);
        assert_eq!(Theme::Professional.toggled(), Theme::Wired);
    }

    #[test]
    fn only_lit_theme_has_lights() {
        assert_eq!(Theme::Professional.profile().lights().len(), 3);
        assert!(Theme::Wired.profile().lights().is_empty());
    }

    #[test]
    fn color_unpacks_channels() {
        assert_eq!(Color(0xff8000).to_array(), [1.0, 128.0 / 255.0, 0.0]);
    }
}
