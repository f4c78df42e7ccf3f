use super::helpers;
use crate::core::geometry::QUAD_CORNERS;
use crate::core::ParticleField;
use wgpu::util::DeviceExt;

/// Particle buffers are uploaded once; the field never changes after startup.
pub(crate) struct ParticlesResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) corner_buffer: wgpu::Buffer,
    pub(crate) center_buffer: Option<wgpu::Buffer>,
    pub(crate) count: u32,
}

pub(crate) fn create_particles_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    field: &ParticleField,
) -> ParticlesResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
    });
    let corner_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_corners"),
        contents: bytemuck::cast_slice(&QUAD_CORNERS),
        usage: wgpu::BufferUsages::VERTEX,
    });
    // zero-sized vertex buffers are invalid, so an empty field draws nothing
    let center_buffer = (!field.is_empty()).then(|| {
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_centers"),
            contents: bytemuck::cast_slice(field.positions()),
            usage: wgpu::BufferUsages::VERTEX,
        })
    });

    let corner_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 2]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
    };
    let center_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &wgpu::vertex_attr_array![1 => Float32x3],
    };
    let pipeline = helpers::make_scene_pipeline(
        device,
        "particles_pipeline",
        layout,
        &shader,
        &[corner_layout, center_layout],
        color_format,
        false,
        None,
    );

    ParticlesResources {
        pipeline,
        corner_buffer,
        center_buffer,
        count: field.len() as u32,
    }
}

impl ParticlesResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        let Some(centers) = &self.center_buffer else {
            return;
        };
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.corner_buffer.slice(..));
        rpass.set_vertex_buffer(1, centers.slice(..));
        rpass.draw(0..QUAD_CORNERS.len() as u32, 0..self.count);
    }
}
