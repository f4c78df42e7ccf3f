pub mod config;
pub mod constants;
pub mod geometry;
pub mod lifecycle;
pub mod motion;
pub mod palette;
pub mod scene;
pub mod viewport;

pub use config::*;
pub use constants::*;
pub use lifecycle::*;
pub use motion::*;
pub use scene::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static SHAPES_WGSL: &str = include_str!("../../shaders/shapes.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
