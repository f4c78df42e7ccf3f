use crate::constants::{CLEAR_COLOR, MSAA_SAMPLES};
use crate::core::palette::{hex_to_linear, light_rgba};
use crate::core::*;
use glam::Vec3;
use web_sys as web;

mod helpers;
mod particles;
mod shapes;
mod targets;
use particles::{create_particles_resources, ParticlesResources};
use shapes::{create_shapes_resources, ShapesResources};
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
    ambient_color: [f32; 4],
    base_color: [f32; 4],
    material: [f32; 4],
    cam_right: [f32; 4], // w = particle size
    cam_up: [f32; 4],
    particle: [f32; 4], // rgb = colour, a = opacity
}

impl Globals {
    fn new(camera: &CameraRig) -> Self {
        let light_dir = Vec3::from_array(DIRECTIONAL_LIGHT_POSITION).normalize();
        let [r, g, b] = hex_to_linear(SHAPE_COLOR_HEX);
        let [pr, pg, pb] = hex_to_linear(PARTICLE_COLOR_HEX);
        let (right, up) = camera.right_up();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            camera_pos: camera.position.extend(1.0).to_array(),
            light_dir: light_dir.extend(0.0).to_array(),
            light_color: light_rgba(DIRECTIONAL_LIGHT_HEX, DIRECTIONAL_LIGHT_INTENSITY),
            ambient_color: light_rgba(AMBIENT_LIGHT_HEX, AMBIENT_LIGHT_INTENSITY),
            base_color: [r, g, b, 1.0],
            material: [SHAPE_ROUGHNESS, SHAPE_METALNESS, 0.0, 0.0],
            cam_right: right.extend(PARTICLE_SIZE).to_array(),
            cam_up: up.extend(0.0).to_array(),
            particle: [pr, pg, pb, PARTICLE_OPACITY],
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    shapes: ShapesResources,
    particles: ParticlesResources,
    width: u32,
    height: u32,
}

impl GpuState {
    /// Acquire an adapter for the canvas and build every pipeline. The
    /// particle field is uploaded here and never again.
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &Scene) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                    label: Some("background_device"),
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let (width, height) = clamp_extent(
            (canvas.width(), canvas.height()),
            device.limits().max_texture_dimension_2d,
        );
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas: let the page show through where nothing is drawn
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height, format, MSAA_SAMPLES);

        let globals_bgl = helpers::globals_bind_group_layout(&device);
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });

        let shapes = create_shapes_resources(&device, &layout, format, scene.shapes.len());
        let particles = create_particles_resources(&device, &layout, format, &scene.particles);

        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?} msaa={}",
            width,
            height,
            format,
            alpha_mode,
            MSAA_SAMPLES
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            globals_buffer,
            globals_bind_group,
            shapes,
            particles,
            width,
            height,
        })
    }

    /// Resize to the canvas backing store, scaled down to the device's
    /// texture limit.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let (width, height) = clamp_extent(
            (width, height),
            self.device.limits().max_texture_dimension_2d,
        );
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &Scene, camera: &CameraRig) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let globals = Globals::new(camera);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        let shape_count = self
            .shapes
            .write_instances(&self.queue, &scene.shapes, camera.position);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.color_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            self.shapes.draw(&mut rpass, shape_count);
            self.particles.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Free GPU memory eagerly instead of waiting for the page to go away.
    pub fn dispose(self) {
        self.targets.destroy();
        self.device.destroy();
        log::debug!("[gpu] disposed");
    }
}
