// Colour helpers. Material and light colours are authored as sRGB hex codes but
// the swapchain is an sRGB format, so shading happens in linear space.

#[inline]
pub fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a `0xRRGGBB` code to linear RGB in [0, 1].
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    [
        srgb_channel_to_linear(r),
        srgb_channel_to_linear(g),
        srgb_channel_to_linear(b),
    ]
}

/// Linear colour scaled by a light intensity, padded for uniform upload.
pub fn light_rgba(hex: u32, intensity: f32) -> [f32; 4] {
    let [r, g, b] = hex_to_linear(hex);
    [r * intensity, g * intensity, b * intensity, 1.0]
}
