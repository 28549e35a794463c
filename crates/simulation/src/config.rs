// Scene layout
pub const TREE_COUNT: usize = 200;
/// Trees are scattered over `[-TREE_HALF_EXTENT, TREE_HALF_EXTENT]` on both x and z.
pub const TREE_HALF_EXTENT: f32 = 40.0;
pub const TRUNK_CENTER_Y: f32 = 1.0;
pub const FOLIAGE_CENTER_Y: f32 = 3.0;

pub const PARTICLE_COUNT: usize = 100;
/// Edge length of the cube (centred at the origin) that particles are scattered in.
pub const PARTICLE_CUBE_SIZE: f32 = 90.0;
pub const PARTICLE_SIZE: f32 = 0.09;
/// Angular drift of the particle field around Y, in radians per second.
pub const PARTICLE_SPIN_RATE: f32 = 0.02;

/// Ground, base layer and sea are all square planes of this size.
pub const PLANE_SIZE: f32 = 100.0;
/// The always-green base layer sits just below the seasonal ground to avoid z-fighting.
pub const BASE_LAYER_OFFSET_Y: f32 = -0.01;
pub const GROUND_TEXTURE_REPEAT: f32 = 8.0;

// Sea surface wave
pub const SEA_SUBDIVISIONS: u32 = 128;
pub const WAVE_AMPLITUDE: f32 = 0.1;
pub const WAVE_FREQUENCY: f32 = 10.0;
pub const WAVE_SPEED: f32 = 2.0;

// Sun
pub const SUN_RADIUS: f32 = 2.0;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
/// Distance the camera moves per arrow key press.
pub const KEY_STEP: f32 = 0.5;

/// Upper bound on the device pixel ratio used for the render surface.
pub const MAX_PIXEL_RATIO: f32 = 2.0;
