use crate::constants::FRAME_STATS_INTERVAL_SEC;
use crate::core::{step, CameraRig, FrameScheduler, ParallaxTarget, Scene, Viewport};
use crate::dom;
use crate::render;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything a frame reads or writes. Event handlers touch `target` and
/// `viewport` between frames; only `frame` advances the animation.
pub struct FrameContext {
    pub scene: Scene,
    pub camera: CameraRig,
    pub target: ParallaxTarget,
    pub viewport: Viewport,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    stats: FrameStats,
}

impl FrameContext {
    pub fn new(
        scene: Scene,
        viewport: Viewport,
        canvas: web::HtmlCanvasElement,
        gpu: render::GpuState,
    ) -> Self {
        let mut ctx = Self {
            scene,
            camera: CameraRig::new(viewport.aspect()),
            target: ParallaxTarget::default(),
            viewport,
            canvas,
            gpu: Some(gpu),
            stats: FrameStats::default(),
        };
        ctx.resize(viewport);
        ctx
    }

    pub fn frame(&mut self) {
        self.stats.tick();
        step(&mut self.scene, &mut self.camera, self.target);

        let Some(g) = &mut self.gpu else {
            return;
        };
        match g.render(&self.scene, &self.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("[frame] surface lost; reconfiguring");
                g.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::debug!("[frame] surface timeout; skipping frame");
            }
            Err(e) => log::warn!("render error: {:?}", e),
        }
    }

    /// Apply a new viewport: canvas backing store, camera aspect and surface.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        dom::sync_canvas_backing_size(&self.canvas, &viewport);
        self.camera.set_aspect(viewport.aspect());
        if let Some(g) = &mut self.gpu {
            let (w, h) = viewport.backing_size();
            g.resize_if_needed(w, h);
        }
    }

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) {
        self.target = ParallaxTarget::from_pointer(client_x, client_y, &self.viewport);
    }

    pub fn release_gpu(&mut self) {
        if let Some(g) = self.gpu.take() {
            g.dispose();
        }
    }
}

/// Rolling frame-time report at debug level.
#[derive(Default)]
struct FrameStats {
    last: Option<Instant>,
    accum_sec: f32,
    frames: u32,
}

impl FrameStats {
    fn tick(&mut self) {
        let now = Instant::now();
        if let Some(prev) = self.last {
            let dt = (now - prev).as_secs_f32();
            // gaps from pauses are not frame time
            if dt < 1.0 {
                self.accum_sec += dt;
                self.frames += 1;
            }
        }
        self.last = Some(now);
        if self.accum_sec >= FRAME_STATS_INTERVAL_SEC && self.frames > 0 {
            log::debug!(
                "[frame] avg {:.2} ms over {} frames",
                1000.0 * self.accum_sec / self.frames as f32,
                self.frames
            );
            self.accum_sec = 0.0;
            self.frames = 0;
        }
    }
}

/// `requestAnimationFrame` backed scheduler. The tick closure is installed
/// after the runtime exists, since it needs a handle back to it.
pub struct RafScheduler {
    window: web::Window,
    tick: Option<Closure<dyn FnMut()>>,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window, tick: None }
    }

    pub fn install(&mut self, tick: Closure<dyn FnMut()>) {
        self.tick = Some(tick);
    }

    /// Drop the tick closure. Must not be called from inside the tick.
    pub fn uninstall(&mut self) {
        self.tick = None;
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&mut self) -> Option<i32> {
        let tick = self.tick.as_ref()?;
        match self
            .window
            .request_animation_frame(tick.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}
