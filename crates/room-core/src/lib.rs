pub mod camera;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod image;
pub mod layers;
pub mod material;
pub mod projector;
pub mod rain;
pub mod scene;
pub mod snow;
pub mod surface;
pub mod texture;
pub mod theme;
pub static ROOM_WGSL: &str = include_str!("../shaders/room.wgsl");

pub use camera::*;
pub use error::*;
pub use image::*;
pub use layers::*;
pub use scene::*;
pub use theme::*;
