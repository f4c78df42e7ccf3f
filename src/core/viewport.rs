use super::constants::MAX_PIXEL_RATIO;

/// Device pixel ratio clamped to `MAX_PIXEL_RATIO`. Browsers that report
/// nothing useful fall back to 1.
#[inline]
pub fn capped_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    dpr.min(MAX_PIXEL_RATIO)
}

/// Scale `(width, height)` down so neither side exceeds `max_dim`, keeping
/// the aspect ratio. Sides stay at least 1.
pub fn clamp_extent((width, height): (u32, u32), max_dim: u32) -> (u32, u32) {
    let max_dim = max_dim.max(1);
    let width = width.max(1);
    let height = height.max(1);
    let longest = width.max(height);
    if longest <= max_dim {
        return (width, height);
    }
    let fit = |side: u32| {
        (side as u64 * max_dim as u64 / longest as u64).clamp(1, max_dim as u64) as u32
    };
    (fit(width), fit(height))
}

/// Window size in CSS pixels together with the capped pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            css_width: css_width.max(0.0),
            css_height: css_height.max(0.0),
            pixel_ratio: capped_pixel_ratio(device_pixel_ratio),
        }
    }

    /// Canvas backing-store size: CSS size times pixel ratio, floored, never 0.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.css_width * self.pixel_ratio).floor() as u32;
        let h = (self.css_height * self.pixel_ratio).floor() as u32;
        (w.max(1), h.max(1))
    }

    pub fn aspect(&self) -> f32 {
        if self.css_height > 0.0 {
            (self.css_width / self.css_height) as f32
        } else {
            1.0
        }
    }
}
