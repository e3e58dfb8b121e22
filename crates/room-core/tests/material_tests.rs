// Host-side tests for per-face material binding.

use room_core::constants::*;
use room_core::material::{bind, Shading};
use room_core::{Color, LayerId, Theme};

#[test]
fn back_wall_gets_the_back_layer() {
    let m = bind(
        Theme::Professional,
        LayerId::ProfessionalWalls,
        LayerId::ProfessionalBackWall,
        LayerId::Snow,
    );
    assert_eq!(m.room.len(), FACE_COUNT);
    for (face, mat) in m.room.iter().enumerate() {
        let expected = if face == BACK_WALL_FACE {
            LayerId::ProfessionalBackWall
        } else {
            LayerId::ProfessionalWalls
        };
        assert_eq!(mat.layer, expected, "face {face}");
        assert_eq!(mat.opacity, 1.0);
        assert!(!mat.transparent);
    }
}

#[test]
fn professional_faces_are_phong_with_emissive_back_wall() {
    let m = bind(
        Theme::Professional,
        LayerId::ProfessionalWalls,
        LayerId::ProfessionalBackWall,
        LayerId::Snow,
    );
    for (face, mat) in m.room.iter().enumerate() {
        let Shading::Phong {
            shininess,
            specular,
            emissive,
            emissive_intensity,
        } = mat.shading
        else {
            panic!("face {face} is not lit");
        };
        assert_eq!(shininess, 20.0);
        assert_eq!(specular, Color(0x333333));
        if face == BACK_WALL_FACE {
            assert_eq!(emissive, Color(0x222222));
            assert_eq!(emissive_intensity, 0.3);
        } else {
            assert_eq!(emissive_intensity, 0.0);
        }
    }
}

#[test]
fn wired_faces_are_unlit() {
    let m = bind(
        Theme::Wired,
        LayerId::WiredWalls,
        LayerId::WiredBackWall,
        LayerId::Snow,
    );
    assert!(m.room.iter().all(|mat| mat.shading == Shading::Unlit));
    assert_eq!(m.room[BACK_WALL_FACE].layer, LayerId::WiredBackWall);
}

#[test]
fn snow_is_invisible_only_on_the_back_wall() {
    for theme in [Theme::Professional, Theme::Wired] {
        let p = theme.profile();
        let m = bind(theme, p.standard_layer, p.back_layer, LayerId::Snow);
        for (face, mat) in m.snow.iter().enumerate() {
            assert_eq!(mat.layer, LayerId::Snow);
            assert!(mat.transparent);
            assert_eq!(mat.shading, Shading::Unlit);
            let expected = if face == BACK_WALL_FACE { 0.0 } else { 1.0 };
            assert_eq!(mat.opacity, expected, "face {face}");
        }
    }
}

#[test]
fn rebinding_flags_every_material_until_acknowledged() {
    let mut m = bind(
        Theme::Wired,
        LayerId::WiredWalls,
        LayerId::WiredBackWall,
        LayerId::Snow,
    );
    assert!(m.room.iter().chain(m.snow.iter()).all(|mat| mat.needs_update));
    assert!(m.needs_update());
    m.acknowledge();
    assert!(!m.needs_update());
}
