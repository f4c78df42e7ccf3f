use crate::core::{FrameLoop, LifecycleEvent, Scene, Viewport};
use crate::dom::EventListener;
use crate::error::StartupError;
use crate::events;
use crate::frame::{FrameContext, RafScheduler};
use crate::render::GpuState;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use web_sys as web;

/// The running background: frame state, the loop that drives it, and the
/// listeners that feed it. One per page load.
pub struct Background {
    pub frame: FrameContext,
    pub frame_loop: FrameLoop<RafScheduler>,
    listeners: Vec<EventListener>,
}

fn listener_error(event: &'static str) -> impl Fn(JsValue) -> StartupError {
    move |e| StartupError::Listener {
        event,
        reason: format!("{:?}", e),
    }
}

impl Background {
    /// Wire listeners and start the loop. The returned handle may be dropped;
    /// the teardown listener keeps the runtime alive until `pagehide`.
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        canvas: web::HtmlCanvasElement,
        scene: Scene,
        viewport: Viewport,
        gpu: GpuState,
    ) -> Result<Rc<RefCell<Self>>, StartupError> {
        let bg = Rc::new(RefCell::new(Self {
            frame: FrameContext::new(scene, viewport, canvas, gpu),
            frame_loop: FrameLoop::new(RafScheduler::new(window.clone())),
            listeners: Vec::new(),
        }));
        let weak = Rc::downgrade(&bg);

        let tick_bg = weak.clone();
        let tick = Closure::wrap(Box::new(move || {
            let Some(bg) = tick_bg.upgrade() else {
                return;
            };
            let mut guard = bg.borrow_mut();
            let bg = &mut *guard;
            if bg.frame_loop.on_frame() {
                bg.frame.frame();
            }
        }) as Box<dyn FnMut()>);
        bg.borrow_mut().frame_loop.scheduler_mut().install(tick);

        let mut listeners = vec![
            events::wire_pointermove(window, weak.clone())
                .map_err(listener_error("pointermove"))?,
            events::wire_resize(window, weak.clone()).map_err(listener_error("resize"))?,
            events::wire_visibility(document, weak.clone())
                .map_err(listener_error("visibilitychange"))?,
            events::wire_pageshow(window, weak.clone()).map_err(listener_error("pageshow"))?,
        ];
        listeners.extend(
            events::wire_focus_blur(window, weak.clone()).map_err(listener_error("focus/blur"))?,
        );
        bg.borrow_mut().listeners = listeners;

        events::wire_teardown(window, bg.clone())
            .map_err(listener_error("pagehide"))?
            .forget();

        let started = bg.borrow_mut().frame_loop.resume();
        log::info!(
            "[background] mounted: {} shapes, {} particles, running={}",
            bg.borrow().frame.scene.shapes.len(),
            bg.borrow().frame.scene.particles.len(),
            started
        );
        Ok(bg)
    }

    /// Route a page signal to the loop. Ignored once the runtime is gone.
    pub fn dispatch(bg: &Weak<RefCell<Self>>, event: LifecycleEvent) {
        let Some(bg) = bg.upgrade() else {
            return;
        };
        let mut bg = bg.borrow_mut();
        let before = bg.frame_loop.state();
        let after = bg.frame_loop.handle(event);
        if before != after {
            log::debug!("[lifecycle] {:?}: {:?} -> {:?}", event, before, after);
        }
    }

    /// Cancel the pending frame, release the GPU and deregister listeners.
    pub fn teardown(bg: &Rc<RefCell<Self>>) {
        let listeners = {
            let mut bg = bg.borrow_mut();
            bg.frame_loop.handle(LifecycleEvent::Teardown);
            bg.frame_loop.scheduler_mut().uninstall();
            bg.frame.release_gpu();
            std::mem::take(&mut bg.listeners)
        };
        let removed: Vec<&'static str> = listeners.iter().map(|l| l.event_type()).collect();
        drop(listeners);
        log::info!("[background] torn down; removed listeners {:?}", removed);
    }
}
