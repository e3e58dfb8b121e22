use std::time::Duration;

// Shared visual tuning constants for the room and its animated layers.

// Raster layers
pub const RASTER_SIZE: f32 = 512.0; // logical width and height of every layer

// Rain (wired theme)
pub const RAIN_COLUMNS: usize = 26;
pub const RAIN_CELL: f32 = 20.0; // column spacing and row height
pub const RAIN_DRAW_PROBABILITY: f64 = 0.95; // per column per tick
pub const RAIN_RESET_THRESHOLD: f64 = 0.975; // reset fires when a draw exceeds this
pub const RAIN_TRAIL_ALPHA: f32 = 0.05; // black veil painted each tick
pub const RAIN_FONT_PX: f32 = 14.0;
pub const RAIN_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*()_+-=[]{}|;:,./<>?ぁあぃいぅうぇえぉおかがきぎくぐけげこごさざしじすずせぜそぞただちぢっつづてでとどなにぬねのはばぱひびぴふぶぷへべぺほぼぽまみむめもゃやゅゆょよらりるれろゎわゐゑをん";

// Floating snippets on the wired back wall
pub const SNIPPET_MAX_LIVE: usize = 5;
pub const SNIPPET_SPAWN_PROBABILITY: f64 = 0.03;
pub const SNIPPET_MAX_X: f32 = 400.0;
pub const SNIPPET_SPEED: f32 = 1.0; // units per tick
pub const SNIPPET_LINE_HEIGHT: f32 = 16.0;
pub const SNIPPET_POOL: &[&str] = &[
    "I am Lain.\nLain is everywhere.",
    "No matter where you go,\neveryone's connected.",
];

// Snow overlay
pub const FLAKE_COUNT: usize = 45;
pub const FLAKE_RECYCLE_MARGIN: f32 = 50.0; // below bottom before recycling, above top on respawn
pub const FLAKE_SPAWN_ABOVE: f32 = 200.0; // initial population starts up to this far above the top
pub const FLAKE_SCALE_MIN: f32 = 0.6;
pub const FLAKE_SCALE_SPAN: f32 = 0.4;
pub const FLAKE_SPEED_MIN: f32 = 0.8;
pub const FLAKE_SPEED_SPAN: f32 = 1.0;
pub const FLAKE_ROTATION_SPEED_SPAN: f32 = 0.6; // degrees per tick, centred on zero
pub const FLAKE_ARM_LENGTH: f32 = 20.0;
pub const FLAKE_BRANCH_START: f32 = 14.0;
pub const FLAKE_BRANCH_END: f32 = 18.0;
pub const FLAKE_BRANCH_SPREAD: f32 = 4.0;
pub const FLAKE_LINE_WIDTH: f32 = 1.0;

// Room geometry
pub const ROOM_WIDTH: f32 = 20.0;
pub const ROOM_HEIGHT: f32 = 20.0;
pub const ROOM_DEPTH: f32 = 30.0;
pub const SNOW_MESH_SCALE: f32 = 0.99; // keeps the snow box off the walls
pub const FACE_COUNT: usize = 6;
pub const BACK_WALL_FACE: usize = 4;

// Overlay quad on the back wall
pub const OVERLAY_HALF_WIDTH: f32 = 10.0;
pub const OVERLAY_HALF_HEIGHT: f32 = 10.0;
pub const OVERLAY_FADE: Duration = Duration::from_millis(600);

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, -10.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 10.0];

// Professional shading
pub const PHONG_SHININESS: f32 = 20.0;
pub const PHONG_SPECULAR: u32 = 0x333333;
pub const BACK_WALL_EMISSIVE: u32 = 0x222222;
pub const BACK_WALL_EMISSIVE_INTENSITY: f32 = 0.3;
