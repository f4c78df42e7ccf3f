/// Web-side constants: DOM hooks and render-target settings.
///
/// Scene tuning (counts, ranges, speeds) lives in `core::constants`.
// Element the background draws into
pub const CANVAS_ID: &str = "bgCanvas";

// Optional attribute on the canvas carrying a u64 layout seed
pub const SEED_ATTRIBUTE: &str = "data-seed";

// Fully transparent so the page shows through
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::TRANSPARENT;

// WebGPU guarantees 4x multisampling for renderable formats
pub const MSAA_SAMPLES: u32 = 4;

// How often the frame loop reports its average frame time (debug level)
pub const FRAME_STATS_INTERVAL_SEC: f32 = 10.0;
