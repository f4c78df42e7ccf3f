use super::helpers;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Multisampled attachments sized to the surface.
///
/// - `color_*` is resolved into the swapchain texture each frame.
/// - `depth_*` is shared by the shape and particle passes.
pub(crate) struct RenderTargets {
    pub(crate) color_tex: wgpu::Texture,
    pub(crate) color_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    samples: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        samples: u32,
    ) -> Self {
        let (color_tex, color_view) =
            helpers::create_attachment_texture(device, "msaa_color", width, height, format, samples);
        let (depth_tex, depth_view) =
            helpers::create_attachment_texture(device, "depth", width, height, DEPTH_FORMAT, samples);
        Self {
            color_tex,
            color_view,
            depth_tex,
            depth_view,
            format,
            samples,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.destroy();
        *self = Self::new(device, width, height, self.format, self.samples);
    }

    pub(crate) fn destroy(&self) {
        self.color_tex.destroy();
        self.depth_tex.destroy();
    }
}
