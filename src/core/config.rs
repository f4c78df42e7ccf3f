use super::constants::*;

/// Generation parameters for the background scene.
///
/// `Default` reproduces the stock layout; tests shrink or grow the counts.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub shape_count: usize,
    pub shape_size_min: f32,
    pub shape_size_span: f32,
    pub shape_opacity_min: f32,
    pub shape_opacity_span: f32,
    pub shape_spread: [f32; 3],
    pub particle_count: usize,
    pub particle_spread: f32,
    /// Fixed RNG seed; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape_count: SHAPE_COUNT,
            shape_size_min: SHAPE_SIZE_MIN,
            shape_size_span: SHAPE_SIZE_SPAN,
            shape_opacity_min: SHAPE_OPACITY_MIN,
            shape_opacity_span: SHAPE_OPACITY_SPAN,
            shape_spread: SHAPE_SPREAD,
            particle_count: PARTICLE_COUNT,
            particle_spread: PARTICLE_SPREAD,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a `data-seed` style attribute; blank or malformed values are ignored.
    pub fn with_seed_attr(self, attr: Option<&str>) -> Self {
        match attr.map(str::trim).and_then(|s| s.parse::<u64>().ok()) {
            Some(seed) => self.with_seed(seed),
            None => self,
        }
    }

    pub fn size_range(&self) -> std::ops::Range<f32> {
        self.shape_size_min..self.shape_size_min + self.shape_size_span
    }

    pub fn opacity_range(&self) -> std::ops::Range<f32> {
        self.shape_opacity_min..self.shape_opacity_min + self.shape_opacity_span
    }
}
