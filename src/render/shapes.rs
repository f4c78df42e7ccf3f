use super::helpers;
use crate::core::geometry::{self, MeshVertex};
use crate::core::Shape;
use glam::Vec3;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ShapeInstance {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) params: [f32; 4], // x = opacity
}

impl ShapeInstance {
    pub(crate) fn from_shape(shape: &Shape) -> Self {
        Self {
            model: shape.model_matrix().to_cols_array_2d(),
            params: [shape.opacity, 0.0, 0.0, 0.0],
        }
    }
}

pub(crate) struct ShapesResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) mesh_buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) capacity: u32,
    instances: Vec<ShapeInstance>,
}

pub(crate) fn create_shapes_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    capacity: usize,
) -> ShapesResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("shapes_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SHAPES_WGSL.into()),
    });
    let mesh = geometry::icosahedron();
    let mesh_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("icosahedron_vb"),
        contents: bytemuck::cast_slice(&mesh),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let capacity = capacity.max(1);
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("shape_instances"),
        size: (capacity * std::mem::size_of::<ShapeInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
    };
    let instance_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ShapeInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &wgpu::vertex_attr_array![
            2 => Float32x4,
            3 => Float32x4,
            4 => Float32x4,
            5 => Float32x4,
            6 => Float32x4
        ],
    };
    let pipeline = helpers::make_scene_pipeline(
        device,
        "shapes_pipeline",
        layout,
        &shader,
        &[vertex_layout, instance_layout],
        color_format,
        true,
        Some(wgpu::Face::Back),
    );

    ShapesResources {
        pipeline,
        mesh_buffer,
        vertex_count: mesh.len() as u32,
        instance_buffer,
        capacity: capacity as u32,
        instances: Vec::with_capacity(capacity),
    }
}

impl ShapesResources {
    /// Upload the current transforms, farthest from `eye` first so the
    /// translucent shapes blend back to front. Returns how many to draw.
    pub(crate) fn write_instances(
        &mut self,
        queue: &wgpu::Queue,
        shapes: &[Shape],
        eye: Vec3,
    ) -> u32 {
        let mut order: Vec<&Shape> = shapes.iter().take(self.capacity as usize).collect();
        order.sort_by(|a, b| {
            b.position
                .distance_squared(eye)
                .total_cmp(&a.position.distance_squared(eye))
        });
        self.instances.clear();
        self.instances
            .extend(order.into_iter().map(ShapeInstance::from_shape));
        if !self.instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.instances));
        }
        self.instances.len() as u32
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, instance_count: u32) {
        if instance_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.mesh_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        rpass.draw(0..self.vertex_count, 0..instance_count);
    }
}
