// Scene layout and animation tuning shared by generation, motion and rendering.

// Shapes
pub const SHAPE_COUNT: usize = 6;
pub const SHAPE_SIZE_MIN: f32 = 0.9;
pub const SHAPE_SIZE_SPAN: f32 = 1.2; // sizes fall in [0.9, 2.1)
pub const SHAPE_OPACITY_MIN: f32 = 0.35;
pub const SHAPE_OPACITY_SPAN: f32 = 0.5; // opacities fall in [0.35, 0.85)

// Full widths of the box shapes are scattered in, centred on the origin
pub const SHAPE_SPREAD: [f32; 3] = [10.0, 6.0, 6.0];

// Particles
pub const PARTICLE_COUNT: usize = 350;
pub const PARTICLE_SPREAD: f32 = 20.0; // each axis in [-10, 10)
pub const PARTICLE_SIZE: f32 = 0.03; // world units
pub const PARTICLE_OPACITY: f32 = 0.8;

// Per-frame rotation (radians)
pub const YAW_STEP_BASE: f32 = 0.002;
pub const YAW_STEP_PER_INDEX: f32 = 0.0003;
pub const PITCH_STEP: f32 = 0.0015;

// Parallax
pub const PARALLAX_SCALE: f32 = 0.6; // target spans +/- PARALLAX_SCALE / 2
pub const CAMERA_EASE: f32 = 0.03; // exponential smoothing factor per frame

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 8.0;

// Viewport
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Lights and materials (sRGB hex)
pub const SHAPE_COLOR_HEX: u32 = 0x60a5fa;
pub const SHAPE_ROUGHNESS: f32 = 0.9;
pub const SHAPE_METALNESS: f32 = 0.1;
pub const PARTICLE_COLOR_HEX: u32 = 0xffffff;
pub const DIRECTIONAL_LIGHT_HEX: u32 = 0x9ee7ff;
pub const DIRECTIONAL_LIGHT_INTENSITY: f32 = 0.9;
pub const DIRECTIONAL_LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const AMBIENT_LIGHT_HEX: u32 = 0xffffff;
pub const AMBIENT_LIGHT_INTENSITY: f32 = 0.35;
