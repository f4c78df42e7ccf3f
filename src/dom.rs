use crate::core::Viewport;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window size in CSS pixels plus the capped device pixel ratio.
pub fn current_viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w, h, window.device_pixel_ratio())
}

/// Size the canvas backing store. CSS size is left alone so layout is untouched.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
}

/// `navigator.gpu` is present. Creating a wgpu instance without it fails late
/// and noisily, so check up front.
pub fn has_webgpu(window: &web::Window) -> bool {
    let navigator = window.navigator();
    js_sys::Reflect::get(&navigator, &JsValue::from_str("gpu"))
        .map(|gpu| !gpu.is_undefined() && !gpu.is_null())
        .unwrap_or(false)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ListenerOptions {
    pub passive: bool,
}

impl ListenerOptions {
    pub const PASSIVE: Self = Self {
        passive: true,
    };
}

/// A registered DOM listener. Dropping the handle deregisters it.
pub struct EventListener {
    target: web::EventTarget,
    event_type: &'static str,
    callback: Option<Closure<dyn FnMut(web::Event)>>,
}

impl EventListener {
    pub fn new<F>(
        target: &web::EventTarget,
        event_type: &'static str,
        options: ListenerOptions,
        handler: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(web::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(options.passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.as_ref().unchecked_ref(),
            &opts,
        )?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback: Some(callback),
        })
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }

    /// Leave the listener attached for the rest of the page's life.
    pub fn forget(mut self) {
        if let Some(cb) = self.callback.take() {
            cb.forget();
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Some(cb) = self.callback.take() {
            _ = self
                .target
                .remove_event_listener_with_callback(self.event_type, cb.as_ref().unchecked_ref());
        }
    }
}
